//! Board square representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the 8x8 board, addressed by row and column.
///
/// Row 0 is Black's back rank, row 7 is Red's back rank. Pieces only ever
/// occupy the dark squares, where row + column is odd.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square from row and column, or `None` if out of bounds.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the square shifted by `(dr, dc)`, or `None` if off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns true for the dark squares, the only ones pieces occupy.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Returns the row-major index (0-63), for board storage.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }

    /// All squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square {
            row: i / 8,
            col: i % 8,
        })
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
