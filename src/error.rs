use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("Sprite '{name}' not found")]
    NotFound { name: String },

    #[error("failed to read sprite at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("pokemon data must be a JSON object keyed by pokemon name")]
    NotAnObject,

    #[error("malformed record for '{name}': missing or invalid `{field}`")]
    MalformedRecord { name: String, field: String },

    #[error("record for '{name}' has the wrong shape")]
    InvalidRecord {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid pokemon JSON")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    #[error("{pokemon} does not know the move '{move_name}'")]
    UnknownMove { pokemon: String, move_name: String },

    #[error("it is not the player's turn")]
    OutOfTurn,
}
