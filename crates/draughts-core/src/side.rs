//! Player side representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in draughts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    Red = 0,
    Black = 1,
}

impl Side {
    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction men advance in (-1 for Red, +1 for Black).
    ///
    /// Red starts on rows 5-7 and moves toward row 0; Black starts on
    /// rows 0-2 and moves toward row 7.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Black => 1,
        }
    }

    /// Returns the row on which this side's men promote (0 for Red, 7 for Black).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Black => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}
