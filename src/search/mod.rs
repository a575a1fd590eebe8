//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate move generation (neighbors of existing stones)
//! - Minimax with alpha-beta pruning and time-bounded iterative deepening

pub mod alphabeta;
pub mod movegen;

pub use alphabeta::{
    find_immediate_win, SearchAborted, SearchResult, SearchStats, Searcher, WIN_SCORE,
};
pub use movegen::generate_moves;
