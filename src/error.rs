//! Error types surfaced by the engine's public API

use thiserror::Error;

/// Errors from parsing caller input or from an unplayable position.
///
/// Search deadline expiry is not represented here: it is recovered inside the
/// search and never reaches the caller.
#[derive(Debug, Error)]
pub enum GomokuError {
    #[error("board has no rows")]
    EmptyBoard,

    #[error("board is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("invalid cell value {value} at ({row}, {col}), expected 0, 1 or 2")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("invalid player {0}, expected 1 or 2")]
    InvalidPlayer(u8),

    #[error("no empty cell left to play")]
    NoCandidateMoves,

    #[error("config error: {0}")]
    Config(String),
}
