//! Error types for the hexapawn crate

use thiserror::Error;

use crate::engine::{Move, Position};

/// Main error type for the hexapawn crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board dimensions {rows}x{cols} (need at least 2 rows and 1 column)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("position {position} is out of bounds for a {rows}x{cols} board")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("illegal move {action}: {reason}")]
    IllegalMove { action: Move, reason: String },

    #[error("position is not terminal; the winner is undefined")]
    NotTerminal,

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("invalid board string: {message} in '{context}'")]
    InvalidBoardString { message: String, context: String },

    #[error("invalid character '{character}' at row {row}, column {col} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
        context: String,
    },

    #[error("invalid move notation '{input}' (expected two squares such as '20 10' or '2,0 1,0')")]
    InvalidMoveNotation { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid side '{input}'. Expected one of: white, black")]
    ParseSide { input: String },

    #[error("invalid opponent '{input}'. Expected one of: {expected}")]
    ParseOpponent { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("terminal prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
