//! Set-level invariants of move generation and application, checked over
//! randomly populated boards.

use draughts_core::{Board, Cell, Move, Side, Square};
use draughts_engine::{generate_moves, Game, Position};
use proptest::prelude::*;

fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        5 => Just(Cell::Empty),
        2 => Just(Cell::Man(Side::Red)),
        2 => Just(Cell::Man(Side::Black)),
        1 => Just(Cell::King(Side::Red)),
        1 => Just(Cell::King(Side::Black)),
    ]
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Red), Just(Side::Black)]
}

prop_compose! {
    /// A position with arbitrary pieces on the 32 dark squares.
    fn arb_position()(
        cells in prop::collection::vec(arb_cell(), 32),
        side in arb_side(),
    ) -> Position {
        let mut board = Board::empty();
        for (cell, sq) in cells.iter().zip(Square::all().filter(|sq| sq.is_dark())) {
            board.set(sq, *cell);
        }
        Position::from_board(board, side)
    }
}

proptest! {
    #[test]
    fn moves_are_all_capturing_or_all_simple(position in arb_position()) {
        let moves = generate_moves(&position);
        if moves.iter().any(Move::is_capture) {
            prop_assert!(moves.iter().all(Move::is_capture));
        }
    }

    #[test]
    fn captured_squares_hold_distinct_enemy_pieces(position in arb_position()) {
        let side = position.side_to_move;
        for m in generate_moves(&position) {
            for &taken in m.captures() {
                prop_assert!(position.board.cell(taken).is_enemy_of(side));
            }
            let mut seen: Vec<usize> = m.captures().iter().map(|sq| sq.index()).collect();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), m.captures().len());
        }
    }

    #[test]
    fn rejected_moves_leave_the_game_unchanged(
        position in arb_position(),
        from_row in 0u8..8,
        from_col in 0u8..8,
        to_row in 0u8..8,
        to_col in 0u8..8,
    ) {
        let mut game = Game::from_position(position);
        let from = Square::new(from_row, from_col).unwrap();
        let to = Square::new(to_row, to_col).unwrap();
        let requested_is_legal = !game.is_over()
            && game
                .legal_moves()
                .iter()
                .any(|m| m.from() == from && m.to() == to);
        prop_assume!(!requested_is_legal);

        let before = game.clone();
        prop_assert!(game.apply_move(from, to).is_err());
        prop_assert_eq!(game, before);
    }

    #[test]
    fn applying_a_move_removes_exactly_the_captured_pieces(position in arb_position()) {
        let mut game = Game::from_position(position.clone());
        prop_assume!(!game.is_over());
        let moves = game.legal_moves();
        prop_assume!(!moves.is_empty());

        let chosen = moves[0].clone();
        let mover = position.side_to_move;
        let enemies_before = position.board.count(mover.opposite());
        game.apply_move(chosen.from(), chosen.to()).unwrap();
        let enemies_after = game.position().board.count(mover.opposite());
        prop_assert_eq!(enemies_before - enemies_after, chosen.captures().len());
        prop_assert_eq!(game.position().board.count(mover), position.board.count(mover));
    }
}
