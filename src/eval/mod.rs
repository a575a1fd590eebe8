//! Evaluation module for Gomoku positions
//!
//! Runs of stones in the four line directions are scored by length and
//! open-endedness; the position value is the difference between both sides.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, score_for_player};
pub use patterns::{run_score, RunScore, Score};
