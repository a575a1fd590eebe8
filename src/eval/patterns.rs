//! Run scores for Gomoku evaluation
//!
//! A run is scored once, by its length and by how many of its two boundary
//! cells are open (empty or off-board).

/// Score type used by evaluation and search.
pub type Score = i64;

/// Scores for runs of stones
pub struct RunScore;

impl RunScore {
    /// Five or longer, regardless of open ends
    pub const FIVE: Score = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: Score = 10_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: Score = 1_000;

    /// Open three: _OOO_
    pub const OPEN_THREE: Score = 1_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: Score = 100;

    /// Open two: _OO_
    pub const OPEN_TWO: Score = 100;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: Score = 10;

    /// Single stone. Scored the same whatever its open ends.
    pub const SINGLE: Score = 10;
}

/// Score of one run of `length` stones with `open_ends` open boundaries.
#[must_use]
pub fn run_score(length: usize, open_ends: u8) -> Score {
    match (length, open_ends) {
        (0, _) => 0,
        (1, _) => RunScore::SINGLE,
        (5.., _) => RunScore::FIVE,
        (_, 0) => 0,
        (4, 2) => RunScore::OPEN_FOUR,
        (4, _) => RunScore::CLOSED_FOUR,
        (3, 2) => RunScore::OPEN_THREE,
        (3, _) => RunScore::CLOSED_THREE,
        (2, 2) => RunScore::OPEN_TWO,
        _ => RunScore::CLOSED_TWO,
    }
}
