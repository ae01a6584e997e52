use burrow_dungeon::render::render_ascii;
use burrow_dungeon::spawning::{entity_glyphs, spawn_level};
use burrow_dungeon::{Area, Dice, DungeonConfig, DungeonGenerator, TileMap};
use clap::Parser;
use hecs::World;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a Burrow Tale dungeon level and print it
#[derive(Parser)]
#[command(name = "burrow-dungeon", version)]
struct Cli {
    /// Seed for the generator and the dice. Random when omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON config file, missing fields fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of split passes
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Print the map and rooms as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct LevelDump<'a> {
    seed: u64,
    rooms: &'a [Area],
    corridors: &'a [Area],
    map: &'a TileMap,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DungeonConfig::load(path)?,
        None => DungeonConfig::default(),
    };
    if let Some(iterations) = cli.iterations {
        config.split_iterations = iterations;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, width = config.width, height = config.height, "generating level");

    let spawn_config = config.spawn.clone();
    let mut generator = DungeonGenerator::new(config, StdRng::seed_from_u64(seed))?;
    generator.generate_map()?;

    if cli.json {
        let dump = LevelDump {
            seed,
            rooms: generator.rooms(),
            corridors: generator.corridors(),
            map: generator.tile_map(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    let mut dice = Dice::from_seed(seed.wrapping_add(1));
    let mut world = World::new();
    let spawns = spawn_level(&mut world, &mut generator, &mut dice, &spawn_config)?;
    info!(
        mobs = spawns.mobs,
        item_drops = spawns.item_drops,
        candles = spawns.candles,
        "level populated"
    );

    print!("{}", render_ascii(generator.tile_map(), &entity_glyphs(&world)));
    Ok(())
}
