//! Win condition checking for standard Gomoku
//!
//! A win is an exact run of five stones. Overlines (six or more) do not win.

use crate::board::{Board, Player, Pos};

/// Direction vectors for line checking (4 directions)
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// Length of a winning run.
pub const WIN_LENGTH: usize = 5;

/// Check whether the stone of `player` at `pos` completes an exact five.
///
/// Walks back to the start of the run in each direction, then counts forward.
/// Only a run of exactly five wins.
#[must_use]
pub fn check_win(board: &Board, pos: Pos, player: Player) -> bool {
    let size = board.size();
    for &(dr, dc) in &DIRECTIONS {
        let mut start = pos;
        while let Some(prev) = start.offset(dr, dc, -1, size) {
            if !board.is_player(prev, player) {
                break;
            }
            start = prev;
        }

        let mut count = 0;
        let mut next = Some(start);
        while let Some(p) = next {
            if !board.is_player(p, player) {
                break;
            }
            count += 1;
            next = p.offset(dr, dc, 1, size);
        }

        // count is the whole run through pos
        if count == WIN_LENGTH {
            return true;
        }
    }
    false
}

/// Scan the board for any exact five and return its owner.
#[must_use]
pub fn find_winner(board: &Board) -> Option<Player> {
    board.positions().find_map(|pos| {
        let player = board.get(pos).player()?;
        check_win(board, pos, player).then_some(player)
    })
}
