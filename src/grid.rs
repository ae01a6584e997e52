use crate::area::Area;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Wall/floor raster of a generated dungeon, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
}

impl TileMap {
    /// A map filled with walls
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
        }
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.get_index(x, y).map(|idx| self.tiles[idx])
    }

    /// Out-of-bounds writes are dropped
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(idx) = self.get_index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    pub fn is_floor(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(Tile::Floor)
    }

    pub fn fill(&mut self, area: &Area, tile: Tile) {
        for (x, y) in area.cells() {
            self.set(x, y, tile);
        }
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    /// Returns true if any of the eight neighbours of `(x, y)` is floor.
    /// Renderers skip walls that fail this check.
    pub fn touches_floor(&self, x: i32, y: i32) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if (dx, dy) != (0, 0) && self.is_floor(x + dx, y + dy) {
                    return true;
                }
            }
        }
        false
    }

    /// Every wall cell bordering the walkable part of the map
    pub fn visible_walls(&self) -> Vec<(i32, i32)> {
        let mut walls = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.get(x, y) == Some(Tile::Wall) && self.touches_floor(x, y) {
                    walls.push((x, y));
                }
            }
        }
        walls
    }
}
