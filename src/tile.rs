use serde::{Deserialize, Serialize};

/// Legacy flag value for a wall cell
pub const TILE_FLAG_WALL: u8 = 0;
/// Legacy flag value for a floor cell
pub const TILE_FLAG_FLOOR: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Wall = TILE_FLAG_WALL,
    Floor = TILE_FLAG_FLOOR,
}

impl Tile {
    /// The 0/1 flag renderers index tiles by
    pub fn flag(&self) -> u8 {
        *self as u8
    }

    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            TILE_FLAG_WALL => Some(Tile::Wall),
            TILE_FLAG_FLOOR => Some(Tile::Floor),
            _ => None,
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor)
    }

    /// Glyph for text output
    pub fn glyph(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }
}
