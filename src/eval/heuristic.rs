//! Heuristic evaluation function for Gomoku board positions
//!
//! Every run of stones is scored by length and open ends. The evaluation is
//! the difference between both sides' totals, so it is zero-sum:
//! `evaluate(board, p) == -evaluate(board, p.opponent())`.

use crate::board::{Board, Player, Pos, Stone};
use crate::rules::win::DIRECTIONS;

use super::patterns::{run_score, Score};

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favor `player`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> Score {
    score_for_player(board, player) - score_for_player(board, player.opponent())
}

/// Sum of run scores for one side.
///
/// A run is counted only from its first stone in each direction, so each
/// distinct run contributes once.
#[must_use]
pub fn score_for_player(board: &Board, player: Player) -> Score {
    let size = board.size();
    let mut score = 0;

    for pos in board.positions() {
        if !board.is_player(pos, player) {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            let before = pos.offset(dr, dc, -1, size);
            if matches!(before, Some(p) if board.is_player(p, player)) {
                continue;
            }

            let mut length = 0;
            let mut after = Some(pos);
            while let Some(p) = after {
                if !board.is_player(p, player) {
                    break;
                }
                length += 1;
                after = p.offset(dr, dc, 1, size);
            }

            let open_ends = is_open(board, before) as u8 + is_open(board, after) as u8;
            score += run_score(length, open_ends);
        }
    }
    score
}

/// Off-board counts as open, as does an empty cell.
#[inline]
fn is_open(board: &Board, cell: Option<Pos>) -> bool {
    cell.map_or(true, |p| board.get(p) == Stone::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::RunScore;

    #[test]
    fn test_empty_board_is_zero() {
        let board = Board::new(15);
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(score_for_player(&board, Player::White), 0);
    }

    #[test]
    fn test_single_stone_counts_each_direction() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);
        assert_eq!(score_for_player(&board, Player::Black), 4 * RunScore::SINGLE);
        assert_eq!(evaluate(&board, Player::Black), 40);
        assert_eq!(evaluate(&board, Player::White), -40);
    }

    #[test]
    fn test_open_three_counted_once() {
        let mut board = Board::new(15);
        for c in 5..8 {
            board.place(Pos::new(7, c), Player::Black);
        }
        // One open three horizontally, three singles in each of the other
        // three directions.
        let expected = RunScore::OPEN_THREE + 3 * 3 * RunScore::SINGLE;
        assert_eq!(score_for_player(&board, Player::Black), expected);
    }

    #[test]
    fn test_blocked_end_reduces_score() {
        let mut board = Board::new(15);
        for c in 5..9 {
            board.place(Pos::new(7, c), Player::White);
        }
        let open = score_for_player(&board, Player::White);

        board.place(Pos::new(7, 4), Player::Black);
        let closed = score_for_player(&board, Player::White);
        assert_eq!(open - closed, RunScore::OPEN_FOUR - RunScore::CLOSED_FOUR);
    }

    #[test]
    fn test_edge_counts_as_open() {
        let mut board = Board::new(15);
        board.place(Pos::new(0, 0), Player::Black);
        board.place(Pos::new(0, 1), Player::Black);
        // Horizontal two touches the left edge: both ends still open
        let horizontal = RunScore::OPEN_TWO;
        let others = 2 * 3 * RunScore::SINGLE;
        assert_eq!(score_for_player(&board, Player::Black), horizontal + others);
    }

    #[test]
    fn test_five_dominates() {
        let mut board = Board::new(15);
        for c in 0..5 {
            board.place(Pos::new(3, c), Player::Black);
        }
        assert!(evaluate(&board, Player::Black) >= RunScore::FIVE);
    }

    #[test]
    fn test_zero_sum_symmetry() {
        let mut board = Board::new(15);
        let stones = [
            (7, 7, Player::Black),
            (7, 8, Player::White),
            (8, 8, Player::Black),
            (6, 6, Player::Black),
            (9, 9, Player::White),
            (6, 8, Player::White),
            (5, 5, Player::Black),
            (0, 14, Player::White),
        ];
        for (r, c, p) in stones {
            board.place(Pos::new(r, c), p);
            assert_eq!(
                evaluate(&board, Player::Black),
                -evaluate(&board, Player::White)
            );
        }
    }
}
