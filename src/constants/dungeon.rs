//! Dungeon generation constants.

/// Default dungeon width in tiles
pub const DUNGEON_DEFAULT_WIDTH: i32 = 80;
/// Default dungeon height in tiles
pub const DUNGEON_DEFAULT_HEIGHT: i32 = 40;
/// Number of BSP passes. The dungeon gets 2^iterations rooms.
pub const DUNGEON_SPLIT_ITERATIONS: u32 = 3;
/// Tiles kept clear between a room and the far edges of its partition
pub const DUNGEON_SPLIT_MARGIN: i32 = 1;
/// Thickness of each corridor segment
pub const DUNGEON_CORRIDOR_WIDTH: i32 = 1;
/// Smallest partition side the room carver accepts with a zero margin
pub const DUNGEON_MIN_LEAF_SIZE: i32 = 4;
/// Hard cap on split passes, keeps `1 << iterations` well inside `usize`
pub const DUNGEON_MAX_SPLIT_ITERATIONS: u32 = 16;
/// Largest accepted width or height, keeps the tile map allocation bounded
pub const DUNGEON_MAX_DIMENSION: i32 = 4096;
