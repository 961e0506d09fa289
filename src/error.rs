//! Error types returned by the engine.

use thiserror::Error;

/// Why a move was refused by [`Board::result`](crate::board::Board::result).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Row or column is outside `0..3`.
    OutOfRange,
    /// The target cell already holds a mark.
    Occupied,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::OutOfRange => write!(f, "coordinate is out of range"),
            MoveRejection::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: usize,
        col: usize,
        reason: MoveRejection,
    },

    #[error("invalid difficulty '{input}' (expected one of: easy, medium, hard)")]
    InvalidDifficulty { input: String },

    #[error("{operation} called on a terminal board")]
    PreconditionViolation { operation: &'static str },

    #[error("random generator returned {value}, outside 0..{bound}")]
    RandomOutOfRange { value: usize, bound: usize },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
