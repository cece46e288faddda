//! Move-tree enumeration for validating move generation.
//!
//! Decided positions have no children, so a branch ending in a win stops
//! contributing nodes below the winning move.

use std::thread;

use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::board_types::*;
use crate::move_generation::move_validator::all_moves;
use crate::rules::game_rules::execute_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub wins: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.wins += rhs.wins;
    }
}

pub fn perft(state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    perft_recurse(state, depth, &mut total);
    total
}

/// Same counts as [`perft`], with one thread per root move.
pub fn perft_multi_threaded(state: &GameState, depth: u8) -> BreakthroughResult<PerftCounts> {
    if depth <= 1 {
        return Ok(perft(state, depth));
    }
    if state.winner.is_some() {
        return Ok(PerftCounts::default());
    }

    let mut handles = Vec::new();
    for mv in all_moves(state, state.current_player) {
        let mut child = state.clone();
        if !execute_move(&mut child, mv.from, mv.to) {
            continue;
        }
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            perft_recurse(&child, depth - 1, &mut local);
            local
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let local = handle
            .join()
            .map_err(|_| BreakthroughError::WorkerDisconnected)?;
        total.merge(local);
    }
    Ok(total)
}

fn count_leaf(child: &GameState, captured: bool, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if captured {
        counts.captures += 1;
    }
    if child.winner.is_some() {
        counts.wins += 1;
    }
}

fn perft_recurse(state: &GameState, depth: u8, counts: &mut PerftCounts) {
    if state.winner.is_some() {
        return;
    }

    for mv in all_moves(state, state.current_player) {
        let mut child = state.clone();
        let captured = !child.piece_at(mv.to).is_empty();
        if !execute_move(&mut child, mv.from, mv.to) {
            continue;
        }

        if depth == 1 {
            count_leaf(&child, captured, counts);
        } else {
            perft_recurse(&child, depth - 1, counts);
        }
    }
}
