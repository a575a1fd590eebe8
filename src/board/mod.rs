//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// The two sides. Player 1 (Black) moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get opponent
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Wire code: 1 for Black, 2 for White
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<Player> {
        match code {
            1 => Some(Player::Black),
            2 => Some(Player::White),
            _ => None,
        }
    }
}

/// Cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Wire code: 0 empty, 1 Black, 2 White
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    #[inline]
    pub fn from_code(code: u8) -> Option<Stone> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }

    /// Owner of the stone, `None` for an empty cell
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Stone::Empty => None,
            Stone::Black => Some(Player::Black),
            Stone::White => Some(Player::White),
        }
    }
}

impl From<Player> for Stone {
    #[inline]
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Stone::Black,
            Player::White => Stone::White,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `k` cells along `(dr, dc)`, `None` when the result leaves an
    /// `size`x`size` board.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, k: isize, size: usize) -> Option<Pos> {
        let r = self.row as isize + dr * k;
        let c = self.col as isize + dc * k;
        if Pos::is_valid(r, c, size) {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }

    #[inline]
    pub fn is_valid(row: isize, col: isize, size: usize) -> bool {
        row >= 0 && (row as usize) < size && col >= 0 && (col as usize) < size
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
