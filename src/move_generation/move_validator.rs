//! Breakthrough movement rules.
//!
//! A piece steps one row forward: straight ahead only onto an empty square,
//! diagonally forward onto an empty square or an opponent piece (capture).
//! Forward is taken from the state's orientation. Nothing here mutates state.
//!
//! Destination order per piece is fixed: straight, then the lower column
//! diagonal, then the higher column diagonal. Move lists are row-major over
//! origin squares, so search ordering is deterministic.

use crate::game_state::board_types::*;

/// Destinations for a `color` piece standing on `from`, ignoring whose turn
/// it is.
fn destinations_for(state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let forward = state.orientation.forward(color);
    let mut out = Vec::with_capacity(3);

    if let Some(ahead) = from.offset(forward, 0) {
        if state.piece_at(ahead).is_empty() {
            out.push(ahead);
        }
    }

    for d_col in [-1, 1] {
        let Some(diag) = from.offset(forward, d_col) else {
            continue;
        };
        match state.piece_at(diag) {
            Cell::Empty => out.push(diag),
            Cell::Piece(other) if other != color => out.push(diag),
            Cell::Piece(_) => {}
        }
    }

    out
}

/// Legal destinations for the piece on `from`.
///
/// Empty unless `from` holds a piece of the side to move.
pub fn valid_destinations(state: &GameState, from: Square) -> Vec<Square> {
    match state.piece_at(from) {
        Cell::Piece(color) if color == state.current_player => {
            destinations_for(state, from, color)
        }
        _ => Vec::new(),
    }
}

/// Every move available to `player`'s pieces, row-major by origin.
///
/// Unlike [`valid_destinations`] this does not require `player` to be on
/// move, so it also serves mobility counting for the waiting side.
pub fn all_moves(state: &GameState, player: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from in Square::all() {
        if state.piece_at(from).holds(player) {
            moves.extend(
                destinations_for(state, from, player)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }
    }
    moves
}

#[inline]
pub fn is_legal(state: &GameState, from: Square, to: Square) -> bool {
    valid_destinations(state, from).contains(&to)
}

/// Short-circuits on the first piece with a move.
pub fn has_any_move(state: &GameState, player: Color) -> bool {
    Square::all().any(|from| {
        state.piece_at(from).holds(player) && !destinations_for(state, from, player).is_empty()
    })
}
