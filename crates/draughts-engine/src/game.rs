//! Full game management with move history.
//!
//! The [`Game`] struct owns a [`Position`] and tracks the applied moves
//! and the terminal result. It validates proposed moves against the legal
//! set, drives capture continuations, and runs terminal detection after
//! every completed turn.

use crate::movegen::generate_moves;
use crate::rules::{terminal_status, GameResult};
use crate::Position;
use draughts_core::{BoardParseError, Cell, Move, Side, Square};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A recorded move in game history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    /// The applied move, including its captured squares.
    pub mov: Move,
    /// The moved piece as it stands after the move, promotion applied.
    pub piece: Cell,
}

/// Rejection kinds for a proposed move.
///
/// A rejected move never mutates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A coordinate lies outside the board.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    /// The requested squares do not form a legal move.
    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// A capture is available and must be taken.
    #[error("a capture is available and must be taken")]
    MustCapture,

    /// The game has already ended.
    #[error("the game has already ended")]
    GameOver,
}

/// Status returned by a successful move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// Turn completed; play passes to the opponent.
    Ok,
    /// The moved piece has another capture open and must keep jumping;
    /// the turn does not pass.
    MustContinue,
    /// The move ended the game.
    Finished(GameResult),
}

/// A complete draughts game with history tracking.
///
/// Unlike [`Position`], which represents a single board state, `Game`
/// records the applied moves and holds the terminal result once the game
/// ends. A finished game rejects all further moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Applied moves, each with the resulting piece.
    moves: Vec<GameMove>,
    /// Game result once the game has ended.
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, Red to move.
    pub fn new() -> Self {
        Game {
            position: Position::initial(),
            moves: Vec::new(),
            result: None,
        }
    }

    /// Creates a game from an arbitrary position, evaluating terminal
    /// status immediately.
    pub fn from_position(position: Position) -> Self {
        let result = terminal_status(&position);
        Game {
            position,
            moves: Vec::new(),
            result,
        }
    }

    /// Creates a game from a board in the text grid format.
    pub fn from_grid(grid: &str, side_to_move: Side) -> Result<Self, BoardParseError> {
        Ok(Self::from_position(Position::from_grid(grid, side_to_move)?))
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the side to move.
    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    /// Returns the square that must keep capturing, if a multi-jump is
    /// in progress.
    pub fn pending_capture(&self) -> Option<Square> {
        self.position.pending_capture
    }

    /// Returns all legal moves in the current position.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_moves(&self.position)
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Returns true if the game has ended.
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the move history.
    pub fn move_history(&self) -> &[GameMove] {
        &self.moves
    }

    /// Returns the most recent history record.
    pub fn last_move(&self) -> Option<&GameMove> {
        self.moves.last()
    }

    /// Returns the number of applied moves.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// Serializes the board to the text grid format.
    pub fn to_grid(&self) -> String {
        self.position.to_grid()
    }

    /// Applies the move from `from` to `to` for the side to move.
    ///
    /// The proposed move is matched against the legal set by origin and
    /// destination only; the captured squares are derived, never supplied
    /// by the caller. On rejection the game is left untouched.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveStatus, MoveError> {
        if self.result.is_some() {
            return Err(MoveError::GameOver);
        }

        let legal = generate_moves(&self.position);
        let chosen = match legal.iter().find(|m| m.from() == from && m.to() == to) {
            Some(chosen) => chosen.clone(),
            None => {
                return Err(if legal.iter().any(Move::is_capture) {
                    MoveError::MustCapture
                } else {
                    MoveError::IllegalMove { from, to }
                });
            }
        };

        let side = self.position.side_to_move;
        let mut piece = self.position.board.cell(from);
        self.position.board.set(from, Cell::Empty);
        for &taken in chosen.captures() {
            self.position.board.set(taken, Cell::Empty);
        }
        let promoted = !piece.is_king() && to.row() == side.promotion_row();
        if promoted {
            piece = piece.promoted();
        }
        self.position.board.set(to, piece);

        if chosen.is_capture() || promoted {
            self.position.halfmove_clock = 0;
        } else {
            self.position.halfmove_clock += 1;
        }

        self.moves.push(GameMove {
            mov: chosen.clone(),
            piece,
        });

        // A capturing move that did not promote may have to keep jumping
        // from its landing square before the turn can pass.
        if chosen.is_capture() && !promoted {
            self.position.pending_capture = Some(to);
            if !generate_moves(&self.position).is_empty() {
                return Ok(MoveStatus::MustContinue);
            }
        }

        self.position.pending_capture = None;
        self.position.side_to_move = side.opposite();

        if let Some(result) = terminal_status(&self.position) {
            self.result = Some(result);
            return Ok(MoveStatus::Finished(result));
        }
        Ok(MoveStatus::Ok)
    }

    /// Applies a move given as raw `(row, col)` pairs, as received from
    /// the application boundary.
    pub fn apply_move_coords(
        &mut self,
        from: (u8, u8),
        to: (u8, u8),
    ) -> Result<MoveStatus, MoveError> {
        let (row, col) = from;
        let from = Square::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        let (row, col) = to;
        let to = Square::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.apply_move(from, to)
    }
}
