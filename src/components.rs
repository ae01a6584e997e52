/// Position component - dungeon coordinates (grid-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Glyph component - how the entity shows up in text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph(pub char);

/// Player marker component
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Mob component
#[derive(Debug, Clone, Copy)]
pub struct Mob {
    pub name: &'static str,
}

/// Candle marker component - wall decoration
#[derive(Debug, Clone, Copy)]
pub struct Candle;

/// Loot a mob leaves behind when killed
#[derive(Debug, Clone, Copy)]
pub struct ItemDrop;
