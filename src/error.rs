use std::path::PathBuf;

use crate::game::Player;

/// Errors returned when a stone cannot be placed. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("position ({row}, {col}) is occupied by {}", .by.name())]
    Occupied { row: usize, col: usize, by: Player },
}

/// Errors returned by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("the game is already over")]
    GameOver,
}

/// Malformed console input. Never reaches the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected a row and a column separated by a comma, got {0} value(s)")]
    WrongTokenCount(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

/// Errors that can occur when building or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("board_size must be >= 1 (got {0})")]
    InvalidBoardSize(usize),

    #[error("board_size must be <= {max} (got {size})")]
    BoardTooLarge { size: usize, max: usize },

    #[error("win_length must be >= 1 (got {0})")]
    InvalidWinLength(usize),

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}
