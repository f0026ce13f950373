//! Board state and its text grid format.

use crate::{Cell, Side, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board grid string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {len} cells, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid cell character '{ch}' at ({row}, {col})")]
    InvalidCell { ch: char, row: usize, col: usize },
}

/// An 8x8 draughts board.
///
/// Stored as a flat array of 64 [`Cell`]s in row-major order. The text
/// grid format used at the storage boundary is 8 rows of 8 characters,
/// row 0 first, separated by newlines: `.` empty, `r`/`R` red man/king,
/// `b`/`B` black man/king.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 64],
        }
    }

    /// Creates the standard starting position: Black men on the dark
    /// squares of rows 0-2, Red men on the dark squares of rows 5-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for sq in Square::all().filter(|sq| sq.is_dark()) {
            if sq.row() < 3 {
                board.set(sq, Cell::Man(Side::Black));
            } else if sq.row() > 4 {
                board.set(sq, Cell::Man(Side::Red));
            }
        }
        board
    }

    /// Returns the cell at the given square.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[sq.index()]
    }

    /// Sets the cell at the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.index()] = cell;
    }

    /// Iterates over the occupied squares of one side, in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().filter_map(move |sq| {
            let cell = self.cell(sq);
            if cell.is_side(side) {
                Some((sq, cell))
            } else {
                None
            }
        })
    }

    /// Counts the pieces of one side.
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// Serializes the board to the text grid format.
    pub fn to_grid(&self) -> String {
        let mut grid = String::with_capacity(71);
        for row in 0..8u8 {
            if row > 0 {
                grid.push('\n');
            }
            for col in 0..8u8 {
                grid.push(self.cells[(row * 8 + col) as usize].to_char());
            }
        }
        grid
    }

    /// Parses a board from the text grid format.
    pub fn from_grid(grid: &str) -> Result<Self, BoardParseError> {
        let rows: Vec<&str> = grid.trim().lines().collect();
        if rows.len() != 8 {
            return Err(BoardParseError::InvalidRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != 8 {
                return Err(BoardParseError::InvalidRowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch)
                    .ok_or(BoardParseError::InvalidCell { ch, row, col })?;
                board.cells[row * 8 + col] = cell;
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.to_grid())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_grid())
    }
}
