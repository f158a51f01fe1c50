pub mod ansi;
pub mod battle;
pub mod console;
pub mod dialog;
pub mod error;
pub mod game;
pub mod menu;
pub mod model;
pub mod pokemon;
pub mod sprite;

use crate::console::Console;
use crate::game::Game;
use crate::model::Pokedex;
use std::path::{Path, PathBuf};

pub const DEFAULT_BATTLE_DISTANCE: usize = 10;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub sprite_dir: PathBuf,
    pub data_path: PathBuf,
    pub seed: Option<u64>,
    pub battle_distance: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sprite_dir: PathBuf::from("sprites"),
            data_path: PathBuf::from("pokemon.json"),
            seed: None,
            battle_distance: DEFAULT_BATTLE_DISTANCE,
        }
    }
}

/// Load the data file and refuse one that lists no pokemon.
pub fn load_pokedex(path: &Path) -> anyhow::Result<Pokedex> {
    let pokedex = Pokedex::load(path)?;
    if pokedex.is_empty() {
        anyhow::bail!("{} does not list any pokemon", path.display());
    }
    tracing::info!(count = pokedex.len(), path = %path.display(), "loaded pokemon data");
    Ok(pokedex)
}

pub fn run(config: GameConfig) -> anyhow::Result<()> {
    let pokedex = load_pokedex(&config.data_path)?;
    let mut game = Game::new(&config, pokedex);
    game.run(&mut Console::stdio())
}
