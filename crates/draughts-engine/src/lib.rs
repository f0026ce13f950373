//! American draughts (checkers) rules engine.
//!
//! This crate provides:
//! - [`Position`] - board, side to move, pending capture continuation, and
//!   the draw clock
//! - [`generate_moves`] - legal move enumeration under the mandatory-capture
//!   and multi-jump rules
//! - [`Game`] - full game management with move history and terminal status
//! - [`terminal_status`] - win/draw detection
//!
//! The engine is a pure, synchronous computation: every operation is a
//! deterministic function from state to state, with no I/O and no internal
//! locking. Serializing concurrent move submissions against the same game
//! is the caller's responsibility.
//!
//! # Example
//!
//! ```
//! use draughts_engine::{Game, MoveStatus};
//!
//! let mut game = Game::new();
//! assert_eq!(game.legal_moves().len(), 7);
//!
//! let status = game.apply_move_coords((5, 0), (4, 1)).unwrap();
//! assert_eq!(status, MoveStatus::Ok);
//! println!("{}", game.to_grid());
//! ```

mod game;
pub mod movegen;
mod position;
pub mod rules;

pub use game::{Game, GameMove, MoveError, MoveStatus};
pub use movegen::generate_moves;
pub use position::Position;
pub use rules::{terminal_status, GameResult, DRAW_HALFMOVE_LIMIT};
