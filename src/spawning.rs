//! Places the player, mobs and candles into a freshly generated level.

use crate::components::{Candle, Glyph, ItemDrop, Mob, Player, Position};
use crate::config::SpawnConfig;
use crate::constants::SPAWN_MOB_NAMES;
use crate::dice::Dice;
use crate::dungeon_gen::DungeonGenerator;
use crate::error::DungeonError;
use hecs::{Entity, World};
use rand::Rng;
use tracing::debug;

/// What [`spawn_level`] put into the world
#[derive(Debug, Clone, Copy)]
pub struct LevelSpawns {
    pub player: Entity,
    pub mobs: usize,
    pub item_drops: usize,
    pub candles: usize,
}

pub fn spawn_player(world: &mut World, pos: Position) -> Entity {
    world.spawn((pos, Glyph('@'), Player))
}

pub fn spawn_candle(world: &mut World, pos: Position) -> Entity {
    world.spawn((pos, Glyph('i'), Candle))
}

pub fn spawn_mob(world: &mut World, pos: Position, name: &'static str, carries_drop: bool) -> Entity {
    if carries_drop {
        world.spawn((pos, Glyph('m'), Mob { name }, ItemDrop))
    } else {
        world.spawn((pos, Glyph('m'), Mob { name }))
    }
}

/// Populate `world` for the generator's current dungeon. The generator must
/// have run `generate_map` first.
pub fn spawn_level<R: Rng, D: Rng>(
    world: &mut World,
    generator: &mut DungeonGenerator<R>,
    dice: &mut Dice<D>,
    config: &SpawnConfig,
) -> Result<LevelSpawns, DungeonError> {
    puffin::profile_function!();

    let player = spawn_player(world, generator.entity_spot()?.into());

    let mob_count = dice.roll(config.mob_dice_faces, config.mob_dice_quantity) as usize;
    let mut item_drops = 0;
    for _ in 0..mob_count {
        let pos = generator.entity_spot()?.into();
        let name = SPAWN_MOB_NAMES[(dice.roll(SPAWN_MOB_NAMES.len() as u32, 1) - 1) as usize];
        let carries_drop = dice.chance(config.item_drop_percent);
        if carries_drop {
            item_drops += 1;
        }
        spawn_mob(world, pos, name, carries_drop);
    }

    let candle_points = generator.candle_points()?;
    for &point in &candle_points {
        spawn_candle(world, point.into());
    }

    debug!(mobs = mob_count, item_drops, candles = candle_points.len(), "spawned level");

    Ok(LevelSpawns {
        player,
        mobs: mob_count,
        item_drops,
        candles: candle_points.len(),
    })
}

/// Every drawable entity, with the player last so it is drawn on top
pub fn entity_glyphs(world: &World) -> Vec<(Position, Glyph)> {
    let mut glyphs = Vec::new();
    let mut players = Vec::new();
    for (_id, (pos, glyph, player)) in world.query::<(&Position, &Glyph, Option<&Player>)>().iter() {
        if player.is_some() {
            players.push((*pos, *glyph));
        } else {
            glyphs.push((*pos, *glyph));
        }
    }
    glyphs.extend(players);
    glyphs
}
