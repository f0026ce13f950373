//! Legal move generation.
//!
//! Enumeration is deterministic: origins are visited in row-major order
//! and directions in a fixed per-piece order, so the same position always
//! yields the same move list.

use crate::Position;
use draughts_core::{Board, Cell, Move, Side, Square};

/// Generates all legal moves for the side to move.
///
/// Captures are mandatory: if any capturing move exists among the eligible
/// origins, only capturing moves are returned, each expanded into its
/// maximal multi-jump sequences. While a capture continuation is pending,
/// generation is restricted to that square and simple moves are never
/// offered.
pub fn generate_moves(position: &Position) -> Vec<Move> {
    let board = &position.board;
    let side = position.side_to_move;

    let origins: Vec<Square> = match position.pending_capture {
        Some(square) => vec![square],
        None => board.pieces(side).map(|(square, _)| square).collect(),
    };

    let mut steps = Vec::new();
    let mut jumps = Vec::new();
    for from in origins {
        let piece = board.cell(from);
        if !piece.is_side(side) {
            continue;
        }
        for &(dr, dc) in piece.directions() {
            if let Some(jump) = jump_in_direction(board, side, from, dr, dc) {
                jumps.push(jump);
            }
        }
        if position.pending_capture.is_none() {
            for &(dr, dc) in piece.directions() {
                if let Some(to) = from.offset(dr, dc) {
                    if board.cell(to).is_empty() {
                        steps.push(Move::step(from, to));
                    }
                }
            }
        }
    }

    if jumps.is_empty() {
        return steps;
    }

    let mut chains = Vec::new();
    for jump in jumps {
        expand_chain(board, side, jump, &mut chains);
    }
    chains
}

/// Tests for a capturing hop from `from` along `(dr, dc)`: an adjacent
/// enemy piece with an empty landing square beyond it.
fn jump_in_direction(board: &Board, side: Side, from: Square, dr: i8, dc: i8) -> Option<Move> {
    let over = from.offset(dr, dc)?;
    let to = from.offset(2 * dr, 2 * dc)?;
    if board.cell(over).is_enemy_of(side) && board.cell(to).is_empty() {
        Some(Move::jump(from, to, vec![over]))
    } else {
        None
    }
}

/// Depth-first expansion of a capture chain into every maximal sequence
/// reachable from it.
///
/// `board` is the position before any hop of the chain. Each call replays
/// the accumulated chain onto a fresh copy, so sibling branches never
/// observe each other's captures. Promotion ends a chain immediately,
/// even when a further jump would be available from the landing square.
fn expand_chain(board: &Board, side: Side, chain: Move, out: &mut Vec<Move>) {
    let mut scratch = board.clone();
    let piece = scratch.cell(chain.from());
    scratch.set(chain.from(), Cell::Empty);
    for &taken in chain.captures() {
        scratch.set(taken, Cell::Empty);
    }

    let landed = chain.to();
    if !piece.is_king() && landed.row() == side.promotion_row() {
        out.push(chain);
        return;
    }
    scratch.set(landed, piece);

    let mut extended = false;
    for &(dr, dc) in piece.directions() {
        if let Some(hop) = jump_in_direction(&scratch, side, landed, dr, dc) {
            extended = true;
            let mut captures = chain.captures().to_vec();
            captures.extend_from_slice(hop.captures());
            expand_chain(board, side, Move::jump(chain.from(), hop.to(), captures), out);
        }
    }
    if !extended {
        out.push(chain);
    }
}
