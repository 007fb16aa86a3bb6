use std::path::PathBuf;

use crate::WIDTH;

/// A move that cannot be applied to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column + 1, WIDTH)]
    ColumnOutOfRange { column: usize },

    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error("Invalid move, the game is over")]
    GameOver,
}

/// Errors building a board from a textual description
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("could not parse '{0}' as a cell")]
    InvalidCell(char),

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),

    #[error("piece at row {row}, column {} is floating above an empty cell", .column + 1)]
    FloatingPiece { row: usize, column: usize },

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
