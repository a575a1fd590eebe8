use super::*;
use crate::error::GomokuError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::Black.opponent(), Player::White);
    assert_eq!(Player::White.opponent(), Player::Black);
}

#[test]
fn test_player_codes() {
    assert_eq!(Player::from_code(1), Some(Player::Black));
    assert_eq!(Player::from_code(2), Some(Player::White));
    assert_eq!(Player::from_code(0), None);
    assert_eq!(Player::from_code(3), None);
    assert_eq!(Player::White.code(), 2);
}

#[test]
fn test_stone_from_player() {
    assert_eq!(Stone::from(Player::Black), Stone::Black);
    assert_eq!(Stone::from(Player::White), Stone::White);
    assert_eq!(Stone::Empty.player(), None);
    assert_eq!(Stone::White.player(), Some(Player::White));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(0, 14);
    assert_eq!(pos.offset(1, -1, 1, 15), Some(Pos::new(1, 13)));
    assert_eq!(pos.offset(0, 1, 1, 15), None);
    assert_eq!(pos.offset(-1, 0, 1, 15), None);
    assert_eq!(pos.offset(1, 0, -1, 15), None);
    assert_eq!(pos.offset(1, 1, 0, 15), Some(pos));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_default_board() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert!(board.is_board_empty());
    assert!(!board.is_full());
    assert_eq!(board.center(), Pos::new(7, 7));
}

#[test]
fn test_place_and_clear() {
    let mut board = Board::new(15);
    let pos = Pos::new(3, 4);

    board.place(pos, Player::White);
    assert_eq!(board.get(pos), Stone::White);
    assert!(board.is_player(pos, Player::White));
    assert!(!board.is_player(pos, Player::Black));
    assert_eq!(board.stone_count(), 1);

    board.clear(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.stone_count(), 0);

    // Clearing an empty cell is a no-op
    board.clear(pos);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_is_full() {
    let mut board = Board::new(2);
    board.place(Pos::new(0, 0), Player::Black);
    board.place(Pos::new(0, 1), Player::White);
    board.place(Pos::new(1, 0), Player::Black);
    assert!(!board.is_full());
    board.place(Pos::new(1, 1), Player::White);
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
#[should_panic]
fn test_out_of_bounds_panics() {
    let board = Board::new(5);
    let _ = board.get(Pos::new(5, 0));
}

#[test]
fn test_from_codes() {
    let rows = vec![vec![0, 1, 0], vec![2, 0, 0], vec![0, 0, 1]];
    let board = Board::from_codes(&rows).unwrap();
    assert_eq!(board.size(), 3);
    assert_eq!(board.get(Pos::new(0, 1)), Stone::Black);
    assert_eq!(board.get(Pos::new(1, 0)), Stone::White);
    assert_eq!(board.stone_count(), 3);
    assert_eq!(board.to_codes(), rows);
}

#[test]
fn test_from_codes_rejects_bad_input() {
    assert!(matches!(Board::from_codes(&[]), Err(GomokuError::EmptyBoard)));

    let ragged = vec![vec![0, 0], vec![0]];
    assert!(matches!(
        Board::from_codes(&ragged),
        Err(GomokuError::NotSquare { row: 1, len: 1, size: 2 })
    ));

    let bad_cell = vec![vec![0, 3], vec![0, 0]];
    assert!(matches!(
        Board::from_codes(&bad_cell),
        Err(GomokuError::InvalidCell { row: 0, col: 1, value: 3 })
    ));
}

#[test]
fn test_positions_row_major() {
    let board = Board::new(3);
    let all: Vec<Pos> = board.positions().collect();
    assert_eq!(all.len(), 9);
    assert_eq!(all[0], Pos::new(0, 0));
    assert_eq!(all[3], Pos::new(1, 0));
    assert_eq!(all[8], Pos::new(2, 2));
}

#[test]
fn test_display() {
    let mut board = Board::new(3);
    board.place(Pos::new(0, 0), Player::Black);
    board.place(Pos::new(2, 1), Player::White);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].ends_with(" X . ."));
    assert!(lines[3].ends_with(" . O ."));
}
