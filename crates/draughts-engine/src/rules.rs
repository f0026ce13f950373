//! Terminal state detection.

use crate::movegen::generate_moves;
use crate::Position;
use draughts_core::Side;
use serde::{Deserialize, Serialize};

/// Number of consecutive capture-free, promotion-free turns after which
/// the game is drawn.
pub const DRAW_HALFMOVE_LIMIT: u32 = 50;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Red wins.
    RedWins,
    /// Black wins.
    BlackWins,
    /// Draw by the halfmove clock.
    Draw,
}

impl GameResult {
    /// Returns the win result for the given side.
    #[inline]
    pub const fn win(side: Side) -> Self {
        match side {
            Side::Red => GameResult::RedWins,
            Side::Black => GameResult::BlackWins,
        }
    }

    /// Returns the winning side, or `None` for a draw.
    #[inline]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::RedWins => Some(Side::Red),
            GameResult::BlackWins => Some(Side::Black),
            GameResult::Draw => None,
        }
    }
}

/// Determines whether the position is terminal for the side to move.
///
/// Run immediately after a turn completes and the side to move swaps.
/// The side to move loses when it has no pieces left or no legal moves;
/// otherwise the game is drawn once the halfmove clock reaches
/// [`DRAW_HALFMOVE_LIMIT`]. The win checks take precedence over the clock.
pub fn terminal_status(position: &Position) -> Option<GameResult> {
    let side = position.side_to_move;
    if position.board.count(side) == 0 {
        return Some(GameResult::win(side.opposite()));
    }
    if generate_moves(position).is_empty() {
        return Some(GameResult::win(side.opposite()));
    }
    if position.halfmove_clock >= DRAW_HALFMOVE_LIMIT {
        return Some(GameResult::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_helpers() {
        assert_eq!(GameResult::win(Side::Red), GameResult::RedWins);
        assert_eq!(GameResult::win(Side::Black), GameResult::BlackWins);
        assert_eq!(GameResult::RedWins.winner(), Some(Side::Red));
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn initial_position_is_not_terminal() {
        assert_eq!(terminal_status(&Position::initial()), None);
    }

    #[test]
    fn side_with_no_pieces_loses() {
        let position = Position::from_grid(
            "........\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             ..r.....\n\
             ........\n\
             ........",
            Side::Black,
        )
        .unwrap();
        assert_eq!(terminal_status(&position), Some(GameResult::RedWins));
    }

    #[test]
    fn blocked_side_loses() {
        // Black still owns a man but it has no step and no jump.
        let position = Position::from_grid(
            "........\n\
             ........\n\
             ........\n\
             b.......\n\
             .r......\n\
             ..r.....\n\
             ........\n\
             ........",
            Side::Black,
        )
        .unwrap();
        assert_eq!(terminal_status(&position), Some(GameResult::RedWins));
    }

    #[test]
    fn clock_limit_draws() {
        let mut position = Position::from_grid(
            "........\n\
             ..B.....\n\
             ........\n\
             ........\n\
             ........\n\
             ........\n\
             .R......\n\
             ........",
            Side::Red,
        )
        .unwrap();
        position.halfmove_clock = DRAW_HALFMOVE_LIMIT;
        assert_eq!(terminal_status(&position), Some(GameResult::Draw));

        position.halfmove_clock = DRAW_HALFMOVE_LIMIT - 1;
        assert_eq!(terminal_status(&position), None);
    }

    #[test]
    fn win_takes_precedence_over_clock() {
        let mut position = Position::from_grid(
            "........\n\
             ........\n\
             ........\n\
             b.......\n\
             .r......\n\
             ..r.....\n\
             ........\n\
             ........",
            Side::Black,
        )
        .unwrap();
        position.halfmove_clock = DRAW_HALFMOVE_LIMIT;
        assert_eq!(terminal_status(&position), Some(GameResult::RedWins));
    }
}
