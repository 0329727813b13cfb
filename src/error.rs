//! Error types of the engine and its configuration.

use std::path::PathBuf;

/// Reasons why a move was not applied to the board.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    /// Column is full.
    #[error("column is full")]
    ColumnFull,
    #[error("column is outside of the board")]
    InvalidColumn,
    /// The game already has a winner or ended in a tie.
    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
