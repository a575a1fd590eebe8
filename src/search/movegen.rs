//! Candidate move generation
//!
//! Candidates are the empty cells in the 8-neighborhood of any stone, in
//! row-major order. On an empty board the only candidate is the center.

use crate::board::{Board, Pos};

/// Generate candidate moves for the side to play.
///
/// Row-major order keeps tie-breaking in the search reproducible.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let size = board.size();
    board
        .empty_cells()
        .filter(|&pos| has_neighbor(board, pos, size))
        .collect()
}

#[inline]
fn has_neighbor(board: &Board, pos: Pos, size: usize) -> bool {
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if let Some(n) = pos.offset(dr, dc, 1, size) {
                if !board.is_empty(n) {
                    return true;
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_empty_board_center() {
        assert_eq!(generate_moves(&Board::new(15)), vec![Pos::new(7, 7)]);
        assert_eq!(generate_moves(&Board::new(4)), vec![Pos::new(2, 2)]);
    }

    #[test]
    fn test_single_stone_ring() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);

        let moves = generate_moves(&board);
        assert_eq!(moves.len(), 8);
        assert_eq!(moves[0], Pos::new(6, 6));
        assert_eq!(moves[7], Pos::new(8, 8));
        assert!(!moves.contains(&Pos::new(7, 7)));
    }

    #[test]
    fn test_corner_stone_clipped() {
        let mut board = Board::new(15);
        board.place(Pos::new(0, 0), Player::White);

        let moves = generate_moves(&board);
        assert_eq!(moves, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
    }

    #[test]
    fn test_overlapping_neighborhoods_deduplicated() {
        let mut board = Board::new(15);
        board.place(Pos::new(7, 7), Player::Black);
        board.place(Pos::new(7, 8), Player::White);

        let moves = generate_moves(&board);
        // 3x4 box minus the two stones
        assert_eq!(moves.len(), 10);
        let mut sorted = moves.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, moves);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let mut board = Board::new(2);
        board.place(Pos::new(0, 0), Player::Black);
        board.place(Pos::new(0, 1), Player::White);
        board.place(Pos::new(1, 0), Player::White);
        board.place(Pos::new(1, 1), Player::Black);
        assert!(generate_moves(&board).is_empty());
    }

    #[test]
    fn test_all_candidates_empty() {
        let mut board = Board::new(9);
        for (r, c) in [(4, 4), (4, 5), (3, 3), (5, 6)] {
            board.place(Pos::new(r, c), Player::Black);
        }
        for pos in generate_moves(&board) {
            assert!(board.is_empty(pos));
        }
    }
}
