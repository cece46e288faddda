//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Layers alternate between the searching player (maximizing) and the
//! opponent (minimizing); leaves are always scored from the searching
//! player's perspective. Each child is explored on its own clone of the
//! parent state, so sibling branches never observe each other and no undo
//! step exists.
//!
//! Moves are tried in generation order and only a strictly better score
//! replaces the running best, so ties resolve to the first move generated.

use tracing::debug;

use crate::game_state::board_types::*;
use crate::move_generation::move_validator::all_moves;
use crate::rules::game_rules::{execute_move, is_game_over};
use crate::search::position_evaluator::{HeuristicEvaluator, PositionScorer};
use crate::search::search_events::{NullObserver, SearchObserver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxResult {
    pub score: i32,
    /// `None` at depth 0, in decided positions, or when no move exists.
    pub best_move: Option<Move>,
}

#[derive(Debug, Clone, Default)]
pub struct MinimaxSearcher<S: PositionScorer = HeuristicEvaluator> {
    scorer: S,
    nodes_visited: u64,
}

impl MinimaxSearcher<HeuristicEvaluator> {
    pub fn new() -> Self {
        Self::with_scorer(HeuristicEvaluator)
    }
}

impl<S: PositionScorer> MinimaxSearcher<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            nodes_visited: 0,
        }
    }

    /// Nodes visited by the most recent `find_best_move*` call.
    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited
    }

    pub fn find_best_move(&mut self, state: &GameState, player: Color, depth: u8) -> MinimaxResult {
        self.find_best_move_observed(state, player, depth, &mut NullObserver)
    }

    /// Search `depth` plies for `player`, reporting progress to `observer`.
    ///
    /// `state` itself is never modified.
    pub fn find_best_move_observed<O: SearchObserver + ?Sized>(
        &mut self,
        state: &GameState,
        player: Color,
        depth: u8,
        observer: &mut O,
    ) -> MinimaxResult {
        self.nodes_visited = 0;

        let (score, best_move) = self.minimax(
            state.clone(),
            depth,
            i32::MIN,
            i32::MAX,
            true,
            player,
            observer,
        );

        debug!(
            %player,
            depth,
            score,
            ?best_move,
            nodes = self.nodes_visited,
            "minimax search finished"
        );

        MinimaxResult { score, best_move }
    }

    #[allow(clippy::too_many_arguments)]
    fn minimax<O: SearchObserver + ?Sized>(
        &mut self,
        mut state: GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        original_player: Color,
        observer: &mut O,
    ) -> (i32, Option<Move>) {
        self.nodes_visited += 1;

        if depth == 0 || is_game_over(&mut state) {
            let evaluation = self.scorer.score(&state, original_player);
            observer.on_leaf_evaluated(evaluation);
            return (evaluation, None);
        }

        let moves = all_moves(&state, state.current_player);
        if moves.is_empty() {
            return (self.scorer.score(&state, original_player), None);
        }

        let mut best_move = None;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in moves {
            observer.on_move_considered(mv);

            let mut child = state.clone();
            let applied = execute_move(&mut child, mv.from, mv.to);
            debug_assert!(applied, "generated move {mv:?} was rejected");

            let (score, _) = self.minimax(
                child,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                original_player,
                observer,
            );

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best, best_move)
    }
}
