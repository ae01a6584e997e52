//! Entity placement constants.

/// Faces on each die rolled for the level's mob count
pub const SPAWN_MOB_DICE_FACES: u32 = 4;
/// Dice rolled for the level's mob count
pub const SPAWN_MOB_DICE_QUANTITY: u32 = 2;
/// Percent chance that a mob carries an item drop
pub const SPAWN_ITEM_DROP_PERCENT: u32 = 25;
/// Mob names picked uniformly when spawning
pub const SPAWN_MOB_NAMES: [&str; 4] = ["Beetle", "Mole", "Centipede", "Badger"];
/// Upper bounds on the mob dice, so a level never asks for millions of mobs
pub const SPAWN_MAX_MOB_DICE_FACES: u32 = 100;
pub const SPAWN_MAX_MOB_DICE_QUANTITY: u32 = 32;
