use crate::area::Area;
use crate::constants::*;
use crate::error::DungeonError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters for a generation run. Missing JSON fields fall back to the
/// defaults in [`crate::constants`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub width: i32,
    pub height: i32,
    pub split_iterations: u32,
    pub split_margin: i32,
    pub corridor_width: i32,
    pub spawn: SpawnConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub mob_dice_faces: u32,
    pub mob_dice_quantity: u32,
    pub item_drop_percent: u32,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            width: DUNGEON_DEFAULT_WIDTH,
            height: DUNGEON_DEFAULT_HEIGHT,
            split_iterations: DUNGEON_SPLIT_ITERATIONS,
            split_margin: DUNGEON_SPLIT_MARGIN,
            corridor_width: DUNGEON_CORRIDOR_WIDTH,
            spawn: SpawnConfig::default(),
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            mob_dice_faces: SPAWN_MOB_DICE_FACES,
            mob_dice_quantity: SPAWN_MOB_DICE_QUANTITY,
            item_drop_percent: SPAWN_ITEM_DROP_PERCENT,
        }
    }
}

/// Smallest partition side that can hold a room with `margin` tiles of
/// clearance. Below this one of the carving ranges is empty.
pub fn min_leaf_size(margin: i32) -> i32 {
    DUNGEON_MIN_LEAF_SIZE.max(4 * margin - 1)
}

impl DungeonConfig {
    pub fn from_json_str(json: &str) -> Result<Self, DungeonError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DungeonError> {
        let json = std::fs::read_to_string(path).map_err(|source| DungeonError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Expected number of rooms, one per leaf
    pub fn room_count(&self) -> usize {
        1 << self.split_iterations
    }

    /// Check that every partition the splitter can produce is big enough
    /// to carve. The narrowest leaf along an axis is the one halved on that
    /// axis every pass.
    pub fn validate(&self) -> Result<(), DungeonError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(DungeonError::InvalidConfig(format!(
                "dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > DUNGEON_MAX_DIMENSION || self.height > DUNGEON_MAX_DIMENSION {
            return Err(DungeonError::InvalidConfig(format!(
                "dimensions {}x{} exceed {}",
                self.width, self.height, DUNGEON_MAX_DIMENSION
            )));
        }
        if self.split_iterations > DUNGEON_MAX_SPLIT_ITERATIONS {
            return Err(DungeonError::InvalidConfig(format!(
                "split_iterations {} exceeds {}",
                self.split_iterations, DUNGEON_MAX_SPLIT_ITERATIONS
            )));
        }
        if self.split_margin < 0 {
            return Err(DungeonError::InvalidConfig(format!(
                "split_margin must not be negative, got {}",
                self.split_margin
            )));
        }
        if self.corridor_width < 1 {
            return Err(DungeonError::InvalidConfig(format!(
                "corridor_width must be at least 1, got {}",
                self.corridor_width
            )));
        }
        if self.spawn.mob_dice_faces > SPAWN_MAX_MOB_DICE_FACES
            || self.spawn.mob_dice_quantity > SPAWN_MAX_MOB_DICE_QUANTITY
        {
            return Err(DungeonError::InvalidConfig(format!(
                "mob dice {}d{} exceed {}d{}",
                self.spawn.mob_dice_quantity,
                self.spawn.mob_dice_faces,
                SPAWN_MAX_MOB_DICE_QUANTITY,
                SPAWN_MAX_MOB_DICE_FACES
            )));
        }

        let min = min_leaf_size(self.split_margin);
        let narrowest_w = self.width >> self.split_iterations;
        let narrowest_h = self.height >> self.split_iterations;
        if narrowest_w < min || narrowest_h < min {
            return Err(DungeonError::LeafTooSmall {
                area: Area::new(0, 0, narrowest_w, narrowest_h),
                min,
            });
        }
        Ok(())
    }
}
