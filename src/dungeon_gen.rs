use crate::area::Area;
use crate::config::{min_leaf_size, DungeonConfig};
use crate::error::DungeonError;
use crate::grid::TileMap;
use crate::partition::PartitionTree;
use crate::tile::Tile;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Edge of a room a corridor or candle attaches to.
/// `Top` is the edge at `y + h`, matching a y-up tilemap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];
}

/// Carve a room inside a leaf partition.
///
/// The room is offset by at least one tile from the leaf's near edges and
/// keeps more than `margin` tiles clear of its far edges, so neighbouring
/// rooms never touch without a corridor.
pub fn carve_room(leaf: &Area, margin: i32, rng: &mut impl Rng) -> Result<Area, DungeonError> {
    let min = min_leaf_size(margin);
    if leaf.w < min || leaf.h < min {
        return Err(DungeonError::LeafTooSmall { area: *leaf, min });
    }

    // Pick a random x and y offset within the first half of the leaf
    let x_offset = rng.gen_range(1..leaf.w / 2);
    let y_offset = rng.gen_range(1..leaf.h / 2);

    let width_bound = leaf.w - x_offset;
    let height_bound = leaf.h - y_offset;

    let room_width = rng.gen_range(width_bound / 2..width_bound - margin);
    let room_height = rng.gen_range(height_bound / 2..height_bound - margin);

    Ok(Area::new(
        leaf.x + x_offset,
        leaf.y + y_offset,
        room_width,
        room_height,
    ))
}

/// Random point on one side of `room`. Points on the top and right sides
/// sit one tile outside the room; bottom and left points are on its own
/// edge. Either way the point is floor-adjacent to the room.
pub fn perimeter_point(room: &Area, rng: &mut impl Rng) -> (i32, i32) {
    let along_x = room.x..room.x + room.w.max(1);
    let along_y = room.y..room.y + room.h.max(1);

    match Side::ALL[rng.gen_range(0..Side::ALL.len())] {
        Side::Top => (rng.gen_range(along_x), room.bottom()),
        Side::Bottom => (rng.gen_range(along_x), room.y),
        Side::Left => (room.x, rng.gen_range(along_y)),
        Side::Right => (room.right(), rng.gen_range(along_y)),
    }
}

/// L-shaped corridor from `a` to `b`: a horizontal run along `a`'s row,
/// then a vertical run along `b`'s column. Both runs include their end
/// points so they share the corner tile.
pub fn dogleg(a: (i32, i32), b: (i32, i32), corridor_width: i32) -> [Area; 2] {
    let (ax, ay) = a;
    let (bx, by) = b;

    let horizontal = Area::new(ax.min(bx), ay, (bx - ax).abs() + 1, corridor_width);
    let vertical = Area::new(bx, ay.min(by), corridor_width, (by - ay).abs() + 1);

    [horizontal, vertical]
}

/// Shuffle `rooms` and chain each room to the next with a dogleg corridor.
/// Segments are clipped to `bounds`.
pub fn connect_rooms(
    rooms: &mut [Area],
    corridor_width: i32,
    bounds: &Area,
    rng: &mut impl Rng,
) -> Vec<Area> {
    puffin::profile_function!();

    rooms.shuffle(rng);

    // Collected separately so the room list stays untouched while we walk it
    let mut corridors = Vec::with_capacity(rooms.len().saturating_sub(1) * 2);
    for pair in rooms.windows(2) {
        let a = perimeter_point(&pair[0], rng);
        let b = perimeter_point(&pair[1], rng);
        for segment in dogleg(a, b, corridor_width) {
            if let Some(clipped) = segment.intersect(bounds) {
                corridors.push(clipped);
            }
        }
    }
    corridors
}

/// Paint every area onto a fresh all-wall map
pub fn rasterize(areas: &[Area], width: usize, height: usize) -> TileMap {
    puffin::profile_function!();

    let mut map = TileMap::new(width, height);
    for area in areas {
        map.fill(area, Tile::Floor);
    }
    map
}

/// Builds BSP dungeons and answers placement queries about the last one.
pub struct DungeonGenerator<R: Rng = StdRng> {
    config: DungeonConfig,
    rng: R,
    tree: PartitionTree,
    /// Rooms first, then corridor segments
    areas: Vec<Area>,
    room_count: usize,
    tile_map: TileMap,
}

impl<R: Rng> DungeonGenerator<R> {
    pub fn new(config: DungeonConfig, rng: R) -> Result<Self, DungeonError> {
        config.validate()?;
        let bounds = Area::new(0, 0, config.width, config.height);
        let tile_map = TileMap::new(config.width as usize, config.height as usize);
        Ok(Self {
            config,
            rng,
            tree: PartitionTree::new(bounds),
            areas: Vec::new(),
            room_count: 0,
            tile_map,
        })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn bounds(&self) -> Area {
        Area::new(0, 0, self.config.width, self.config.height)
    }

    /// Partition tree of the last generation
    pub fn tree(&self) -> &PartitionTree {
        &self.tree
    }

    /// Carved rooms, in shuffled corridor order
    pub fn rooms(&self) -> &[Area] {
        &self.areas[..self.room_count]
    }

    pub fn corridors(&self) -> &[Area] {
        &self.areas[self.room_count..]
    }

    /// Rooms followed by corridor segments
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn tile_map(&self) -> &TileMap {
        &self.tile_map
    }

    /// Generate a new dungeon, replacing the previous one.
    pub fn generate_map(&mut self) -> Result<&TileMap, DungeonError> {
        puffin::profile_function!();

        let bounds = self.bounds();
        let mut tree = PartitionTree::new(bounds);
        for pass in 0..self.config.split_iterations {
            tree.split_all(&mut self.rng);
            debug!(pass, leaves = tree.leaves().len(), "split pass");
        }

        let mut rooms = Vec::with_capacity(tree.leaves().len());
        for leaf in tree.leaf_areas() {
            rooms.push(carve_room(&leaf, self.config.split_margin, &mut self.rng)?);
        }

        let corridors = connect_rooms(
            &mut rooms,
            self.config.corridor_width,
            &bounds,
            &mut self.rng,
        );

        self.tree = tree;
        self.room_count = rooms.len();
        self.areas = rooms;
        self.areas.extend(corridors);
        self.tile_map = rasterize(
            &self.areas,
            self.config.width as usize,
            self.config.height as usize,
        );

        info!(
            rooms = self.room_count,
            corridors = self.areas.len() - self.room_count,
            floor = self.tile_map.floor_count(),
            "generated dungeon"
        );
        Ok(&self.tile_map)
    }

    /// Random floor coordinate for placing the player, a mob or an item.
    /// Corridors count as rooms here.
    pub fn entity_spot(&mut self) -> Result<(i32, i32), DungeonError> {
        let room = *self
            .areas
            .choose(&mut self.rng)
            .ok_or(DungeonError::NotGenerated)?;
        let x = self.rng.gen_range(room.x..room.right());
        let y = self.rng.gen_range(room.y..room.bottom());
        Ok((x, y))
    }

    /// One decoration point on the edge of every area wider and taller than
    /// one tile.
    pub fn candle_points(&mut self) -> Result<Vec<(i32, i32)>, DungeonError> {
        if self.areas.is_empty() {
            return Err(DungeonError::NotGenerated);
        }

        let mut points = Vec::new();
        for room in &self.areas {
            if room.w > 1 && room.h > 1 {
                points.push(perimeter_point(room, &mut self.rng));
            }
        }
        Ok(points)
    }
}

impl DungeonGenerator<StdRng> {
    pub fn from_seed(config: DungeonConfig, seed: u64) -> Result<Self, DungeonError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn generated(seed: u64) -> DungeonGenerator {
        let mut gen = DungeonGenerator::from_seed(DungeonConfig::default(), seed).unwrap();
        gen.generate_map().unwrap();
        gen
    }

    /// Number of floor tiles reachable from the first floor tile
    fn reachable_floor(map: &TileMap) -> usize {
        let Some(start) = map.tiles.iter().position(|t| t.is_walkable()) else {
            return 0;
        };
        let start = ((start % map.width) as i32, (start / map.width) as i32);
        let mut seen = vec![false; map.tiles.len()];
        let mut queue = VecDeque::from([start]);
        seen[start.1 as usize * map.width + start.0 as usize] = true;
        let mut count = 0;
        while let Some((x, y)) = queue.pop_front() {
            count += 1;
            for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                if map.is_floor(nx, ny) {
                    let idx = ny as usize * map.width + nx as usize;
                    if !seen[idx] {
                        seen[idx] = true;
                        queue.push_back((nx, ny));
                    }
                }
            }
        }
        count
    }

    fn touches_area(area: &Area, (x, y): (i32, i32)) -> bool {
        area.contains(x, y)
            || area.contains(x - 1, y)
            || area.contains(x + 1, y)
            || area.contains(x, y - 1)
            || area.contains(x, y + 1)
    }

    #[test]
    fn test_generates_one_room_per_leaf() {
        let gen = generated(1);
        assert_eq!(gen.tile_map().width, 80);
        assert_eq!(gen.tile_map().height, 40);
        assert_eq!(gen.tree().leaves().len(), 8);
        assert_eq!(gen.rooms().len(), 8);
        assert_eq!(gen.corridors().len(), 14);
        assert_eq!(gen.areas().len(), 22);
    }

    #[test]
    fn test_each_room_sits_in_its_own_leaf() {
        for seed in 0..50 {
            let gen = generated(seed);
            let leaves = gen.tree().leaf_areas();
            for room in gen.rooms() {
                let holders: Vec<_> = leaves.iter().filter(|l| l.contains_area(room)).collect();
                assert_eq!(holders.len(), 1, "seed {}: room {:?}", seed, room);
                let leaf = holders[0];
                assert!(room.w >= 1 && room.h >= 1);
                assert!(room.x > leaf.x && room.y > leaf.y);
                assert!(room.right() + gen.config().split_margin < leaf.right());
                assert!(room.bottom() + gen.config().split_margin < leaf.bottom());
            }
        }
    }

    #[test]
    fn test_carve_room_in_4x4_leaf() {
        let leaf = Area::new(10, 20, 4, 4);
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let room = carve_room(&leaf, 1, &mut rng).unwrap();
            assert!((1..=2).contains(&room.w), "{:?}", room);
            assert!((1..=2).contains(&room.h), "{:?}", room);
            assert!(leaf.contains_area(&room));
        }
    }

    #[test]
    fn test_carve_room_rejects_small_leaf() {
        let mut rng = StdRng::seed_from_u64(0);
        for leaf in [Area::new(0, 0, 3, 10), Area::new(0, 0, 10, 3), Area::new(0, 0, 0, 0)] {
            assert!(matches!(
                carve_room(&leaf, 1, &mut rng),
                Err(DungeonError::LeafTooSmall { area, min: 4 }) if area == leaf
            ));
        }
        // A wider margin needs a bigger leaf
        assert!(carve_room(&Area::new(0, 0, 6, 6), 2, &mut rng).is_err());
        assert!(carve_room(&Area::new(0, 0, 7, 7), 2, &mut rng).is_ok());
    }

    #[test]
    fn test_dogleg_shares_corner() {
        let [h, v] = dogleg((2, 3), (7, 9), 1);
        assert_eq!(h, Area::new(2, 3, 6, 1));
        assert_eq!(v, Area::new(7, 3, 1, 7));

        let [h, v] = dogleg((7, 9), (2, 3), 1);
        assert_eq!(h, Area::new(2, 9, 6, 1));
        assert_eq!(v, Area::new(2, 3, 1, 7));
        assert!(h.contains(2, 9) && v.contains(2, 9));
    }

    #[test]
    fn test_dogleg_between_aligned_points() {
        let [h, v] = dogleg((4, 4), (4, 4), 1);
        assert_eq!(h, Area::new(4, 4, 1, 1));
        assert_eq!(v, Area::new(4, 4, 1, 1));
    }

    #[test]
    fn test_perimeter_point_touches_room() {
        let room = Area::new(5, 5, 4, 3);
        let mut rng = StdRng::seed_from_u64(11);
        let mut sides_seen = [false; 4];
        for _ in 0..1000 {
            let (x, y) = perimeter_point(&room, &mut rng);
            assert!(touches_area(&room, (x, y)), "({}, {}) not on {:?}", x, y, room);
            if y == room.bottom() {
                sides_seen[0] = true;
            } else if x == room.right() {
                sides_seen[3] = true;
            } else if y == room.y {
                sides_seen[1] = true;
            } else if x == room.x {
                sides_seen[2] = true;
            }
        }
        assert!(sides_seen.iter().all(|&s| s));
    }

    #[test]
    fn test_corridors_connect_every_room() {
        for seed in 0..50 {
            let gen = generated(seed);
            let map = gen.tile_map();
            assert_eq!(reachable_floor(map), map.floor_count(), "seed {} is disconnected", seed);
        }
    }

    #[test]
    fn test_corridor_chain_links_consecutive_rooms() {
        let gen = generated(5);
        let rooms = gen.rooms();
        let corridors = gen.corridors();
        for (i, pair) in rooms.windows(2).enumerate() {
            let horizontal = corridors[i * 2];
            let vertical = corridors[i * 2 + 1];
            assert!(horizontal.cells().any(|c| touches_area(&pair[0], c)));
            assert!(vertical.cells().any(|c| touches_area(&pair[1], c)));
        }
    }

    #[test]
    fn test_rasterize_is_idempotent() {
        let gen = generated(2);
        let once = rasterize(gen.areas(), 80, 40);
        let twice = rasterize(gen.areas(), 80, 40);
        assert_eq!(once, twice);
        assert_eq!(&once, gen.tile_map());
    }

    #[test]
    fn test_every_area_is_floor() {
        let gen = generated(3);
        for area in gen.areas() {
            for (x, y) in area.cells() {
                assert!(gen.tile_map().is_floor(x, y));
            }
        }
        assert!(gen.tile_map().floor_count() < 80 * 40);
    }

    #[test]
    fn test_entity_spot_is_floor() {
        let mut gen = generated(4);
        for _ in 0..1000 {
            let (x, y) = gen.entity_spot().unwrap();
            assert!(gen.tile_map().is_floor(x, y), "({}, {}) is a wall", x, y);
        }
    }

    #[test]
    fn test_queries_before_generation_fail() {
        let mut gen = DungeonGenerator::from_seed(DungeonConfig::default(), 0).unwrap();
        assert!(matches!(gen.entity_spot(), Err(DungeonError::NotGenerated)));
        assert!(matches!(gen.candle_points(), Err(DungeonError::NotGenerated)));
        assert_eq!(gen.tile_map().floor_count(), 0);
    }

    #[test]
    fn test_candle_points_one_per_large_room() {
        let mut gen = generated(6);
        let eligible: Vec<Area> = gen
            .areas()
            .iter()
            .copied()
            .filter(|a| a.w > 1 && a.h > 1)
            .collect();
        let points = gen.candle_points().unwrap();
        assert_eq!(points.len(), eligible.len());
        for (room, point) in eligible.iter().zip(&points) {
            assert!(touches_area(room, *point));
        }
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let a = generated(42);
        let b = generated(42);
        assert_eq!(a.rooms(), b.rooms());
        assert_eq!(a.corridors(), b.corridors());
        assert_eq!(a.tile_map(), b.tile_map());
    }

    #[test]
    fn test_regeneration_replaces_previous_dungeon() {
        let mut gen = generated(8);
        let first = gen.tile_map().clone();
        gen.generate_map().unwrap();
        assert_eq!(gen.rooms().len(), 8);
        assert_eq!(gen.corridors().len(), 14);
        assert_eq!(gen.tree().leaves().len(), 8);
        // A fresh grid, not one painted over the last
        assert_eq!(&rasterize(gen.areas(), 80, 40), gen.tile_map());
        assert_ne!(&first, gen.tile_map());
    }

    #[test]
    fn test_wide_corridors_and_margin() {
        let config = DungeonConfig {
            width: 120,
            height: 60,
            split_margin: 2,
            corridor_width: 2,
            ..Default::default()
        };
        let mut gen = DungeonGenerator::from_seed(config, 9).unwrap();
        gen.generate_map().unwrap();
        let bounds = gen.bounds();
        for corridor in gen.corridors() {
            assert!(bounds.contains_area(corridor));
        }
        let map = gen.tile_map();
        assert_eq!(reachable_floor(map), map.floor_count());
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = DungeonConfig {
            split_iterations: 5,
            ..Default::default()
        };
        assert!(matches!(
            DungeonGenerator::from_seed(config, 0),
            Err(DungeonError::LeafTooSmall { .. })
        ));
    }
}
