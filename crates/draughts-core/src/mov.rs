//! Move representation.

use crate::Square;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A draughts move: a single diagonal step, or a complete capture chain
/// by one piece.
///
/// The captured squares are listed in jump order; a multi-jump is one
/// `Move` whose destination is the final landing square.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    from: Square,
    to: Square,
    captures: Vec<Square>,
}

impl Move {
    /// Creates a simple one-step move.
    pub fn step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captures: Vec::new(),
        }
    }

    /// Creates a capturing move with the given captured squares in jump order.
    pub fn jump(from: Square, to: Square, captures: Vec<Square>) -> Self {
        Move { from, to, captures }
    }

    /// Returns the origin square.
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// Returns the captured squares in jump order (empty for a step).
    #[inline]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    /// Returns true if this move captures at least one piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
