//! Text rendering of a generated level.
//!
//! Mirrors what the tile renderer does with a map: floor is always drawn,
//! walls only where they border floor, entities on top.

use crate::components::{Glyph, Position};
use crate::grid::TileMap;
use crate::tile::Tile;

/// Render `map` row by row with `overlays` drawn over the tiles in order.
pub fn render_ascii(map: &TileMap, overlays: &[(Position, Glyph)]) -> String {
    puffin::profile_function!();

    let mut cells: Vec<char> = Vec::with_capacity(map.tiles.len());
    for y in 0..map.height as i32 {
        for x in 0..map.width as i32 {
            let glyph = match map.get(x, y) {
                Some(Tile::Floor) => Tile::Floor.glyph(),
                Some(Tile::Wall) if map.touches_floor(x, y) => Tile::Wall.glyph(),
                _ => ' ',
            };
            cells.push(glyph);
        }
    }

    for (pos, glyph) in overlays {
        if map.get(pos.x, pos.y).is_some() {
            cells[pos.y as usize * map.width + pos.x as usize] = glyph.0;
        }
    }

    let mut out = String::with_capacity(cells.len() + map.height);
    for row in cells.chunks(map.width.max(1)) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
