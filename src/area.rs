use serde::{Deserialize, Serialize};

/// A rectangle representing a partition, room or corridor segment.
///
/// A zero-sized area doubles as a plain coordinate, see [`Area::point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Area {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Area {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A 0x0 area sitting at `(x, y)`
    pub fn point(x: i32, y: i32) -> Self {
        Self::new(x, y, 0, 0)
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if `other` lies entirely within this rectangle
    pub fn contains_area(&self, other: &Area) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// The overlapping part of two areas, if any
    pub fn intersect(&self, other: &Area) -> Option<Area> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        let clipped = Area::new(x, y, right - x, bottom - y);
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }

    /// Every covered cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let Area { x, y, w, h } = *self;
        (y..y + h.max(0)).flat_map(move |cy| (x..x + w.max(0)).map(move |cx| (cx, cy)))
    }

    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.w as usize * self.h as usize
        }
    }
}
