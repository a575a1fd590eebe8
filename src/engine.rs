//! Main AI Engine integrating all search components
//!
//! This module provides the entry point used by callers: given a board and
//! the player to move, it returns the cell to play.
//!
//! 1. **Search**: time-bounded iterative deepening over a private copy of
//!    the board (immediate wins are taken first)
//! 2. **Random fallback**: if no depth completed before the deadline, a
//!    uniformly random candidate move
//! 3. **Any empty cell**: if there are no candidates but the board is not
//!    full
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineConfig, Player, Pos};
//!
//! let config = EngineConfig { max_depth: Some(2), start_depth: 2, ..EngineConfig::default() };
//! let mut engine = AIEngine::with_config(config);
//! let mut board = Board::new(9);
//! board.place(Pos::new(4, 4), Player::Black);
//!
//! let result = engine.get_move_with_stats(&board, Player::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Source: {:?}", result.source);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Player, Pos};
use crate::config::EngineConfig;
use crate::error::GomokuError;
use crate::eval::Score;
use crate::search::{generate_moves, Searcher};

/// Where the returned move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveSource {
    /// The move completes an exact five
    ImmediateWin,
    /// Best move of the deepest completed search pass
    Search,
    /// No pass completed in time; random candidate
    RandomFallback,
    /// No candidates at all; random empty cell
    AnyEmptyCell,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Move to play
    pub best_move: Pos,
    /// Search value of the move, 0 for fallback moves
    pub score: Score,
    /// Last completed depth, 0 for fallback moves
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Which stage produced the move
    pub source: MoveSource,
}

/// Main AI Engine for Gomoku.
///
/// Holds the configuration and the random source for fallback moves. The
/// engine never mutates the caller's board; searches run on a copy.
pub struct AIEngine {
    config: EngineConfig,
    rng: StdRng,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - 10s search time limit
    /// - start at depth 4, no depth cap
    /// - fallback moves seeded from OS entropy
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Set the internal search deadline.
    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.config.time_limit_ms = time_ms;
    }

    /// Set or remove the depth cap.
    pub fn set_max_depth(&mut self, depth: Option<u8>) {
        self.config.max_depth = depth;
    }

    /// Get the best move for `player`.
    ///
    /// Convenience wrapper around [`AIEngine::get_move_with_stats`].
    pub fn get_move(&mut self, board: &Board, player: Player) -> Result<Pos, GomokuError> {
        self.get_move_with_stats(board, player).map(|r| r.best_move)
    }

    /// Get the best move with search statistics.
    ///
    /// Always returns an empty cell while one exists, however little time
    /// the search gets. Fails with [`GomokuError::NoCandidateMoves`] only on a
    /// full board.
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        player: Player,
    ) -> Result<MoveResult, GomokuError> {
        let start = Instant::now();
        if board.is_full() {
            return Err(GomokuError::NoCandidateMoves);
        }

        let mut work_board = board.clone();
        let mut searcher = Searcher::new(
            self.config.time_limit(),
            self.config.start_depth,
            self.config.max_depth,
        );
        let result = searcher.search(&mut work_board, player);
        debug_assert_eq!(&work_board, board, "search left stones on the board");

        let outcome = match result.best_move {
            Some(pos) => MoveResult {
                best_move: pos,
                score: result.score,
                depth: result.depth,
                time_ms: start.elapsed().as_millis() as u64,
                nodes: result.stats.nodes,
                source: if result.immediate_win {
                    MoveSource::ImmediateWin
                } else {
                    MoveSource::Search
                },
            },
            None => {
                let (pos, source) = self.fallback(board)?;
                warn!(
                    "no search depth completed within {}ms, {:?} picked {:?}",
                    self.config.time_limit_ms, source, pos
                );
                MoveResult {
                    best_move: pos,
                    score: 0,
                    depth: 0,
                    time_ms: start.elapsed().as_millis() as u64,
                    nodes: result.stats.nodes,
                    source,
                }
            }
        };

        info!(
            "{:?} plays ({}, {}) via {:?}: depth {} score {} nodes {} in {}ms",
            player,
            outcome.best_move.row,
            outcome.best_move.col,
            outcome.source,
            outcome.depth,
            outcome.score,
            outcome.nodes,
            outcome.time_ms
        );
        Ok(outcome)
    }

    /// Pick a random candidate, or any random empty cell when there are none.
    fn fallback(&mut self, board: &Board) -> Result<(Pos, MoveSource), GomokuError> {
        let candidates = generate_moves(board);
        if let Some(&pos) = candidates.choose(&mut self.rng) {
            return Ok((pos, MoveSource::RandomFallback));
        }

        let empty: Vec<Pos> = board.empty_cells().collect();
        empty
            .choose(&mut self.rng)
            .map(|&pos| (pos, MoveSource::AnyEmptyCell))
            .ok_or(GomokuError::NoCandidateMoves)
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the next move from wire-format input.
///
/// `rows` is a square grid of 0 (empty), 1 and 2; `player` is 1 or 2.
/// Returns `(row, col)` of an empty cell.
pub fn compute_move(rows: &[Vec<u8>], player: u8) -> Result<(usize, usize), GomokuError> {
    compute_move_with_config(rows, player, EngineConfig::default())
}

/// [`compute_move`] with an explicit configuration.
pub fn compute_move_with_config(
    rows: &[Vec<u8>],
    player: u8,
    config: EngineConfig,
) -> Result<(usize, usize), GomokuError> {
    let player = Player::from_code(player).ok_or(GomokuError::InvalidPlayer(player))?;
    let board = Board::from_codes(rows)?;
    let pos = AIEngine::with_config(config).get_move(&board, player)?;
    Ok((pos.row, pos.col))
}
