//! Front-end boundary of the game core.
//!
//! These functions are everything a presentation layer needs: start a game,
//! query highlights for a square, play a move, check for the end of the game
//! and ask the engine for its move together with search metrics.

use std::time::{Duration, Instant};

use tracing::info;

use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::board_types::*;
use crate::move_generation::move_validator::valid_destinations;
use crate::rules::game_rules::{execute_move, is_game_over, setup_initial_position};
use crate::search::minimax::MinimaxSearcher;
use crate::search::search_events::{NullObserver, SearchObserver};

/// Result of one engine turn plus the metrics gathered while searching.
#[derive(Debug, Clone, PartialEq)]
pub struct AiMoveReport {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u8,
    pub nodes_visited: u64,
    pub elapsed: Duration,
    /// `nodes_visited^(1/depth)`; `None` when depth is 0 or at most one
    /// node was visited.
    pub branching_factor: Option<f64>,
}

pub fn new_game(human: Color) -> GameState {
    let mut state = GameState::new_empty(Orientation::new(human));
    setup_initial_position(&mut state, human);
    state
}

/// Destinations to highlight for the piece on `(row, col)`. Off-board
/// coordinates and squares without a piece of the side to move yield none.
pub fn square_moves(state: &GameState, row: i8, col: i8) -> Vec<Square> {
    match Square::new(row, col) {
        Some(from) => valid_destinations(state, from),
        None => Vec::new(),
    }
}

/// Play `from -> to`; `false` means the move was illegal and nothing changed.
#[inline]
pub fn apply_move(state: &mut GameState, from: Square, to: Square) -> bool {
    execute_move(state, from, to)
}

/// [`apply_move`] with a typed error for callers that propagate with `?`.
pub fn try_apply_move(state: &mut GameState, from: Square, to: Square) -> BreakthroughResult<()> {
    if state.winner.is_some() {
        return Err(BreakthroughError::GameOver);
    }
    if execute_move(state, from, to) {
        Ok(())
    } else {
        Err(BreakthroughError::IllegalMove { from, to })
    }
}

/// True once the game is decided. Records the winner when the side to move
/// is stuck.
#[inline]
pub fn is_over(state: &mut GameState) -> bool {
    is_game_over(state)
}

#[inline]
pub fn winner(state: &GameState) -> Option<Color> {
    state.winner
}

pub fn branching_factor(nodes_visited: u64, depth: u8) -> Option<f64> {
    if depth > 0 && nodes_visited > 1 {
        Some((nodes_visited as f64).powf(1.0 / f64::from(depth)))
    } else {
        None
    }
}

pub fn compute_ai_move(state: &GameState, player: Color, depth: u8) -> AiMoveReport {
    compute_ai_move_observed(state, player, depth, &mut NullObserver)
}

/// Blocking engine turn with progress reported to `observer`.
pub fn compute_ai_move_observed<O: SearchObserver + ?Sized>(
    state: &GameState,
    player: Color,
    depth: u8,
    observer: &mut O,
) -> AiMoveReport {
    let started = Instant::now();
    let mut searcher = MinimaxSearcher::new();
    let result = searcher.find_best_move_observed(state, player, depth, observer);
    let elapsed = started.elapsed();
    let nodes_visited = searcher.nodes_visited();

    let report = AiMoveReport {
        best_move: result.best_move,
        score: result.score,
        depth,
        nodes_visited,
        elapsed,
        branching_factor: branching_factor(nodes_visited, depth),
    };

    info!(
        %player,
        depth,
        best_move = ?report.best_move,
        score = report.score,
        nodes = nodes_visited,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "engine move computed"
    );

    report
}
