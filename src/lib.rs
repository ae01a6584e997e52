//! Procedural dungeon generation for The Burrow Tale.
//!
//! A rectangular dungeon is split into a binary space partition, a room is
//! carved into every leaf, and the rooms are chained together with dogleg
//! corridors before being rasterized into a wall/floor [`TileMap`].

pub mod area;
pub mod components;
pub mod config;
pub mod constants;
pub mod dice;
pub mod dungeon_gen;
pub mod error;
pub mod grid;
pub mod partition;
pub mod render;
pub mod spawning;
pub mod tile;

pub use area::Area;
pub use config::{DungeonConfig, SpawnConfig};
pub use dice::Dice;
pub use dungeon_gen::DungeonGenerator;
pub use error::DungeonError;
pub use grid::TileMap;
pub use partition::{NodeId, PartitionTree, SplitAxis};
pub use tile::Tile;
