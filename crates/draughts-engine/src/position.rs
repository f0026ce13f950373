//! Game position representation.

use draughts_core::{Board, BoardParseError, Side, Square};

/// A complete draughts position: the board plus the bookkeeping needed to
/// generate and apply the next move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Side,

    /// Square whose piece must keep capturing, while a multi-jump is in
    /// progress. All move generation is restricted to this origin until
    /// the continuation resolves.
    pub pending_capture: Option<Square>,

    /// Completed turns without a capture or promotion, for the draw clock.
    pub halfmove_clock: u32,
}

impl Position {
    /// Creates the standard starting position with Red to move.
    pub fn initial() -> Self {
        Self::from_board(Board::initial(), Side::Red)
    }

    /// Creates a position from an arbitrary board.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Position {
            board,
            side_to_move,
            pending_capture: None,
            halfmove_clock: 0,
        }
    }

    /// Creates a position from the text grid format.
    pub fn from_grid(grid: &str, side_to_move: Side) -> Result<Self, BoardParseError> {
        Ok(Self::from_board(Board::from_grid(grid)?, side_to_move))
    }

    /// Serializes the board to the text grid format.
    pub fn to_grid(&self) -> String {
        self.board.to_grid()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::initial()
    }
}
