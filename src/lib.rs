//! Gomoku AI Engine
//!
//! Computes the next move for a player in standard Gomoku on an N×N board
//! (15×15 by default):
//! - Exact five in a row wins; overlines (six or more) do not
//! - Any empty cell may be played
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and player/stone types
//! - [`rules`]: Exact-five win detection
//! - [`eval`]: Run-based position evaluation
//! - [`search`]: Candidate generation and time-bounded minimax
//! - [`engine`]: Main AI engine with fallbacks for expired deadlines
//! - [`config`], [`protocol`], [`error`]: configuration, JSON shapes, errors
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Player, Pos};
//!
//! // Cap the depth so the doc test runs quickly
//! let config = EngineConfig { start_depth: 2, max_depth: Some(2), ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::default();
//!
//! board.place(Pos::new(7, 7), Player::Black);
//!
//! // AI responds as White
//! let pos = engine.get_move(&board, Player::White).unwrap();
//! board.place(pos, Player::White);
//! println!("AI plays at ({}, {})", pos.row, pos.col);
//! ```
//!
//! # Search
//!
//! 1. Immediate winning move (taken even with no time left)
//! 2. Minimax with alpha-beta, iterative deepening from depth 4 until the
//!    time limit
//! 3. Random candidate if no depth completed in time

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{compute_move, compute_move_with_config, AIEngine, MoveResult, MoveSource};
pub use error::GomokuError;
