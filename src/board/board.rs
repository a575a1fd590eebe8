//! Board structure with occupancy tracking

use std::fmt;

use super::{Player, Pos, Stone, DEFAULT_BOARD_SIZE};
use crate::error::GomokuError;

/// Square game board. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Number of occupied cells, kept in step with `place`/`clear`
    stones: usize,
}

impl Board {
    /// Empty `size`x`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            stones: 0,
        }
    }

    /// Build a board from rows of wire codes (0 empty, 1 Black, 2 White).
    ///
    /// The grid must be non-empty and square.
    pub fn from_codes(rows: &[Vec<u8>]) -> Result<Self, GomokuError> {
        let size = rows.len();
        if size == 0 {
            return Err(GomokuError::EmptyBoard);
        }

        let mut board = Board::new(size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GomokuError::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                let stone = Stone::from_code(value).ok_or(GomokuError::InvalidCell {
                    row: r,
                    col: c,
                    value,
                })?;
                if let Some(player) = stone.player() {
                    board.place(Pos::new(r, c), player);
                }
            }
        }
        Ok(board)
    }

    /// Rows of wire codes, the inverse of [`Board::from_codes`].
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(
            pos.row < self.size && pos.col < self.size,
            "{pos:?} outside {0}x{0} board",
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// True when the cell holds a stone of `player`.
    #[inline]
    pub fn is_player(&self, pos: Pos, player: Player) -> bool {
        self.get(pos) == Stone::from(player)
    }

    /// Place a stone on an empty cell.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos);
        debug_assert!(self.cells[idx] == Stone::Empty, "{pos:?} already occupied");
        self.cells[idx] = Stone::from(player);
        self.stones += 1;
    }

    /// Reset a cell to empty.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = self.index(pos);
        if self.cells[idx] != Stone::Empty {
            self.cells[idx] = Stone::Empty;
            self.stones -= 1;
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.stones
    }

    /// No empty cell remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stones == self.cells.len()
    }

    /// Check if board has no stones
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.stones == 0
    }

    /// Center cell `(size / 2, size / 2)`.
    #[inline]
    pub fn center(&self) -> Pos {
        Pos::new(self.size / 2, self.size / 2)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |i| Pos::new(i / self.size, i % self.size))
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions().filter(move |&p| self.is_empty(p))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:2}", c % 100)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:2} ", r % 100)?;
            for c in 0..self.size {
                let ch = match self.get(Pos::new(r, c)) {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
