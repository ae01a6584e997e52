//! Generator constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

mod dungeon;
mod spawning;

pub use dungeon::*;
pub use spawning::*;
