//! State transitions: setup, win detection and move execution.
//!
//! `execute_move` is the only routine that mutates a live `GameState`.
//! Validation always happens before any write, so a rejected move leaves the
//! state untouched.

use tracing::{debug, trace};

use crate::game_state::board_types::*;
use crate::move_generation::move_validator::{has_any_move, is_legal};

/// Color that moves first in every game, regardless of who is human.
pub const FIRST_MOVER: Color = Color::White;

/// Reset `state` to the starting position for a game where `human` plays
/// from the bottom edge.
pub fn setup_initial_position(state: &mut GameState, human: Color) {
    let orientation = Orientation::new(human);
    *state = GameState::new_empty(orientation);

    for color in [Color::White, Color::Black] {
        for row in orientation.home_rows(color) {
            for col in 0..BOARD_SIZE as u8 {
                state.set_piece(Square { row, col }, Cell::Piece(color));
            }
        }
    }

    state.current_player = FIRST_MOVER;
}

/// True when a `moved` piece arriving on `destination_row` has reached its
/// goal rank.
#[inline]
pub fn check_win_condition(state: &GameState, destination_row: u8, moved: Color) -> bool {
    destination_row == state.orientation.goal_row(moved)
}

/// True when the game has ended.
///
/// A side to move with no legal move loses: the opponent is recorded as the
/// winner as part of this check.
pub fn is_game_over(state: &mut GameState) -> bool {
    if state.winner.is_some() {
        return true;
    }

    if !has_any_move(state, state.current_player) {
        let winner = get_opponent(state.current_player);
        debug!(
            stuck = %state.current_player,
            %winner,
            "side to move has no legal move"
        );
        state.set_winner(winner);
        return true;
    }

    false
}

/// Validate and play `from -> to` for the side to move.
///
/// Returns `false` and leaves `state` unchanged when the move is illegal or
/// the game already has a winner.
pub fn execute_move(state: &mut GameState, from: Square, to: Square) -> bool {
    if state.winner.is_some() || !is_legal(state, from, to) {
        debug!(?from, ?to, player = %state.current_player, "rejected move");
        return false;
    }

    let moved = state.current_player;
    let captured = state.piece_at(to).color();

    state.set_piece(to, Cell::Piece(moved));
    state.set_piece(from, Cell::Empty);
    state.add_to_history(Move::new(from, to));

    trace!(?from, ?to, player = %moved, ?captured, "executed move");

    if check_win_condition(state, to.row, moved) {
        state.set_winner(moved);
    } else {
        state.switch_player();
    }

    true
}

#[inline]
pub const fn get_opponent(player: Color) -> Color {
    player.opposite()
}
