use clap::Parser;
use pokemon_ansi_battle::{run, GameConfig, DEFAULT_BATTLE_DISTANCE};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pokemon-ansi-battle")]
#[command(about = "Turn-based pokemon battles drawn with true-color terminal sprites")]
struct Args {
    /// Directory holding one sprite file per pokemon (lowercase names)
    #[arg(long = "sprites", env = "POKEMON_SPRITES", default_value = "sprites")]
    sprite_dir: PathBuf,

    /// JSON file with HP and moves for every pokemon
    #[arg(long = "data", env = "POKEMON_DATA", default_value = "pokemon.json")]
    data_path: PathBuf,

    /// Seed for the enemy's move choices
    #[arg(long)]
    seed: Option<u64>,

    /// Cells between the two pokemon in the battle scene
    #[arg(long, default_value_t = DEFAULT_BATTLE_DISTANCE)]
    distance: usize,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    run(GameConfig {
        sprite_dir: args.sprite_dir,
        data_path: args.data_path,
        seed: args.seed,
        battle_distance: args.distance,
    })
}
