use crate::area::Area;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DungeonError {
    /// A configuration value is out of range
    #[error("invalid dungeon config: {0}")]
    InvalidConfig(String),

    /// A partition is too small to carve a room into
    #[error(
        "partition {}x{} at ({}, {}) is smaller than the minimum leaf size {min}",
        .area.w, .area.h, .area.x, .area.y
    )]
    LeafTooSmall { area: Area, min: i32 },

    /// A query ran before any rooms were generated
    #[error("no rooms generated yet, call generate_map first")]
    NotGenerated,

    /// A config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config document is not valid JSON for [`crate::DungeonConfig`]
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
