//! Game rules for standard Gomoku
//!
//! Only the win condition matters to the engine: an exact five wins,
//! overlines do not.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, find_winner, WIN_LENGTH};
