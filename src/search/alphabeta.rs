//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! This module implements the core search algorithm for the Gomoku AI.
//!
//! # Features
//!
//! - Iterative deepening from a starting depth until the time limit expires
//! - Alpha-beta pruning over maximizing (AI) and minimizing (opponent) nodes
//! - Immediate-win short-circuit after every placement
//! - Cooperative deadline: checked at every node entry; an expired deadline
//!   aborts the whole pass and the last completed depth's move is kept
//!
//! The board is used as the traversal stack. Each explored move is placed
//! before recursing and cleared afterwards, on the abort path too, so the
//! board is back in its original state whenever a search returns.
//!
//! Deadline checks happen only at node entry, so an aborted pass can overrun
//! the time limit by the cost of one leaf evaluation plus one move
//! generation. A new depth is started whenever the previous one completes,
//! with no time reserved for it.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use gomoku::board::{Board, Player, Pos};
//! use gomoku::search::Searcher;
//!
//! let mut searcher = Searcher::new(Duration::from_secs(5), 2, Some(2));
//! let mut board = Board::new(9);
//! board.place(Pos::new(4, 4), Player::Black);
//!
//! let result = searcher.search(&mut board, Player::White);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Player, Pos};
use crate::eval::{evaluate, RunScore, Score};
use crate::rules::check_win;

use super::movegen::generate_moves;

/// Score of a won position.
pub const WIN_SCORE: Score = RunScore::FIVE;

/// Infinity score for alpha-beta bounds
const INF: Score = Score::MAX;

/// Marker for a pass cut short by the deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAborted;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Minimax node entries, root children included
    pub nodes: u64,
    /// Leaf evaluations
    pub evaluations: u64,
    /// Sibling loops cut by beta <= alpha
    pub cutoffs: u64,
    /// Immediate wins found after a placement
    pub win_shortcuts: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move from the last completed depth, if any
    pub best_move: Option<Pos>,
    /// Value of the best move from the AI's perspective
    pub score: Score,
    /// Last completed depth, 0 when no pass completed
    pub depth: u8,
    /// True when the move wins on the spot
    pub immediate_win: bool,
    /// Wall-clock time spent
    pub elapsed: Duration,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Outcome of one completed root pass.
#[derive(Debug, Clone, Copy)]
struct RootPass {
    best_move: Option<Pos>,
    score: Score,
    immediate_win: bool,
}

/// Time-bounded minimax searcher.
pub struct Searcher {
    time_limit: Duration,
    start_depth: u8,
    max_depth: Option<u8>,
    player: Player,
    start_time: Instant,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher.
    ///
    /// * `time_limit` - deadline for the whole iterative-deepening run
    /// * `start_depth` - first depth searched (at least 1)
    /// * `max_depth` - optional cap; `None` deepens until the deadline
    #[must_use]
    pub fn new(time_limit: Duration, start_depth: u8, max_depth: Option<u8>) -> Self {
        Self {
            time_limit,
            start_depth: start_depth.max(1),
            max_depth,
            player: Player::Black,
            start_time: Instant::now(),
            stats: SearchStats::default(),
        }
    }

    /// Search for the best move for `player` using iterative deepening.
    ///
    /// Returns the result of the deepest completed pass. `best_move` is `None`
    /// only if not even the first pass completed, or the board has no
    /// candidates.
    pub fn search(&mut self, board: &mut Board, player: Player) -> SearchResult {
        self.reset(player);

        let mut best = RootPass {
            best_move: None,
            score: -INF,
            immediate_win: false,
        };
        let mut completed = 0u8;
        let empty_cells = board.size() * board.size() - board.stone_count();

        let mut depth = self.start_depth;
        loop {
            if self.max_depth.is_some_and(|max| depth > max) {
                break;
            }

            match self.search_root(board, depth) {
                Ok(pass) => {
                    debug!(
                        "depth {} complete: move {:?} score {} nodes {} in {:?}",
                        depth,
                        pass.best_move,
                        pass.score,
                        self.stats.nodes,
                        self.start_time.elapsed()
                    );
                    best = pass;
                    completed = depth;
                    // Deeper passes cannot change an immediate win, nor see
                    // past a full board.
                    if pass.immediate_win || usize::from(depth) >= empty_cells {
                        break;
                    }
                }
                Err(SearchAborted) => {
                    debug!(
                        "depth {} aborted at deadline after {} nodes",
                        depth, self.stats.nodes
                    );
                    break;
                }
            }

            depth = match depth.checked_add(1) {
                Some(d) => d,
                None => break,
            };
        }

        SearchResult {
            best_move: best.best_move,
            score: best.score,
            depth: completed,
            immediate_win: best.immediate_win,
            elapsed: self.start_time.elapsed(),
            stats: self.stats.clone(),
        }
    }

    /// Run a single pass at exactly `depth`.
    ///
    /// Returns `None` if the deadline expired before the pass completed.
    pub fn search_fixed(
        &mut self,
        board: &mut Board,
        player: Player,
        depth: u8,
    ) -> Option<SearchResult> {
        self.reset(player);
        let depth = depth.max(1);
        let pass = self.search_root(board, depth).ok()?;
        Some(SearchResult {
            best_move: pass.best_move,
            score: pass.score,
            depth,
            immediate_win: pass.immediate_win,
            elapsed: self.start_time.elapsed(),
            stats: self.stats.clone(),
        })
    }

    fn reset(&mut self, player: Player) {
        self.player = player;
        self.start_time = Instant::now();
        self.stats = SearchStats::default();
    }

    /// Check the deadline.
    #[inline]
    fn check_time(&self) -> Result<(), SearchAborted> {
        if self.start_time.elapsed() >= self.time_limit {
            Err(SearchAborted)
        } else {
            Ok(())
        }
    }

    /// Root pass: every candidate is tried for the AI, the first strictly
    /// best one is kept. Immediate wins are taken before any recursion, so
    /// they are found even when no time is left to search.
    ///
    /// The running best is passed down as alpha. A child that fails low
    /// returns a value no greater than it, so the chosen move is the same as
    /// with a full window.
    fn search_root(&mut self, board: &mut Board, depth: u8) -> Result<RootPass, SearchAborted> {
        let player = self.player;
        let moves = generate_moves(board);

        if let Some(mov) = find_immediate_win(board, &moves, player) {
            self.stats.win_shortcuts += 1;
            return Ok(RootPass {
                best_move: Some(mov),
                score: WIN_SCORE,
                immediate_win: true,
            });
        }

        let mut best_move = None;
        let mut best_score = -INF;

        for mov in moves {
            board.place(mov, player);
            let outcome = self.minimax(board, depth - 1, best_score, INF, false);
            board.clear(mov);
            let score = outcome?;

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
        }

        Ok(RootPass {
            best_move,
            score: best_score,
            immediate_win: false,
        })
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Scores are always from the AI's perspective. `maximizing` is true when
    /// the AI is to move.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Result<Score, SearchAborted> {
        self.stats.nodes += 1;
        self.check_time()?;

        if depth == 0 || board.is_full() {
            self.stats.evaluations += 1;
            return Ok(evaluate(board, self.player));
        }

        let moves = generate_moves(board);

        if maximizing {
            let player = self.player;
            let mut max_eval = -INF;
            for mov in moves {
                board.place(mov, player);
                if check_win(board, mov, player) {
                    board.clear(mov);
                    self.stats.win_shortcuts += 1;
                    return Ok(WIN_SCORE);
                }
                let outcome = self.minimax(board, depth - 1, alpha, beta, false);
                board.clear(mov);
                let score = outcome?;

                max_eval = max_eval.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let opponent = self.player.opponent();
            let mut min_eval = INF;
            for mov in moves {
                board.place(mov, opponent);
                if check_win(board, mov, opponent) {
                    board.clear(mov);
                    self.stats.win_shortcuts += 1;
                    return Ok(-WIN_SCORE);
                }
                let outcome = self.minimax(board, depth - 1, alpha, beta, true);
                board.clear(mov);
                let score = outcome?;

                min_eval = min_eval.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(min_eval)
        }
    }
}

/// First candidate that completes an exact five for `player`.
///
/// Each candidate is placed, checked and cleared again; the board is unchanged
/// on return.
pub fn find_immediate_win(board: &mut Board, moves: &[Pos], player: Player) -> Option<Pos> {
    moves.iter().copied().find(|&mov| {
        board.place(mov, player);
        let wins = check_win(board, mov, player);
        board.clear(mov);
        wins
    })
}
