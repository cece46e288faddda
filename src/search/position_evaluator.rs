//! Static position evaluation.
//!
//! Search delegates leaf scoring to the `PositionScorer` trait so heuristics
//! can be swapped without touching the search code. Scores are always from
//! the perspective of the `player` argument, and for undecided positions
//! `score(state, c) == -score(state, c.opposite())` holds exactly.

use crate::game_state::board_types::*;
use crate::move_generation::move_validator::all_moves;

pub const MATERIAL_VALUE: i32 = 100;
pub const ADVANCEMENT_VALUE: i32 = 10;
pub const MOBILITY_VALUE: i32 = 5;
pub const WIN_VALUE: i32 = 10_000;

pub trait PositionScorer: Send + Sync {
    /// Score `state` from `player`'s point of view.
    fn score(&self, state: &GameState, player: Color) -> i32;
}

/// Material, advancement and mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicEvaluator;

impl PositionScorer for HeuristicEvaluator {
    fn score(&self, state: &GameState, player: Color) -> i32 {
        evaluate(state, player)
    }
}

/// Material and advancement only; skips both move-generation passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickEvaluator;

impl PositionScorer for QuickEvaluator {
    fn score(&self, state: &GameState, player: Color) -> i32 {
        quick_evaluate(state, player)
    }
}

fn terminal_score(state: &GameState, player: Color) -> Option<i32> {
    state.winner.map(|winner| {
        if winner == player {
            WIN_VALUE
        } else {
            -WIN_VALUE
        }
    })
}

/// Material plus advancement toward the goal rank for every `side` piece.
fn material_and_advancement(state: &GameState, side: Color) -> i32 {
    state
        .piece_squares(side)
        .into_iter()
        .map(|sq| {
            MATERIAL_VALUE
                + i32::from(state.orientation.advancement(side, sq.row)) * ADVANCEMENT_VALUE
        })
        .sum()
}

#[inline]
fn mobility(state: &GameState, side: Color) -> i32 {
    all_moves(state, side).len() as i32
}

pub fn evaluate(state: &GameState, player: Color) -> i32 {
    if let Some(score) = terminal_score(state, player) {
        return score;
    }

    let opponent = player.opposite();
    material_and_advancement(state, player) - material_and_advancement(state, opponent)
        + (mobility(state, player) - mobility(state, opponent)) * MOBILITY_VALUE
}

pub fn quick_evaluate(state: &GameState, player: Color) -> i32 {
    if let Some(score) = terminal_score(state, player) {
        return score;
    }

    material_and_advancement(state, player) - material_and_advancement(state, player.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::game_rules::{execute_move, is_game_over, setup_initial_position};
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn position(rows: &[&str], human: Color) -> GameState {
        GameState::from_rows(rows, Color::White, Orientation::new(human))
            .expect("position should parse")
    }

    #[test]
    fn starting_position_is_balanced() {
        for human in [Color::White, Color::Black] {
            let mut state = GameState::default();
            setup_initial_position(&mut state, human);
            assert_eq!(evaluate(&state, Color::White), 0);
            assert_eq!(evaluate(&state, Color::Black), 0);
            assert_eq!(quick_evaluate(&state, Color::White), 0);
        }
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let rows = [
            "BB.B.BBB",
            "B..B..B.",
            "..B.....",
            "...W..B.",
            ".W......",
            "W...W...",
            "WW.W.WW.",
            "W.WWWW.W",
        ];
        let state = position(&rows, Color::White);
        let white = evaluate(&state, Color::White);
        assert_ne!(white, 0);
        assert_eq!(white, -evaluate(&state, Color::Black));
        assert_eq!(
            quick_evaluate(&state, Color::White),
            -quick_evaluate(&state, Color::Black)
        );
    }

    #[test]
    fn evaluation_is_antisymmetric_along_random_games() {
        for human in [Color::White, Color::Black] {
            for seed in 0..8u64 {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut state = GameState::default();
                setup_initial_position(&mut state, human);

                let mut checked = 0;
                while !is_game_over(&mut state) {
                    let white = evaluate(&state, Color::White);
                    assert_eq!(
                        white,
                        -evaluate(&state, Color::Black),
                        "human={human} seed={seed} ply={checked}"
                    );
                    assert_eq!(
                        quick_evaluate(&state, Color::White),
                        -quick_evaluate(&state, Color::Black)
                    );
                    checked += 1;

                    let moves = all_moves(&state, state.current_player);
                    let mv = *moves.as_slice().choose(&mut rng).expect("game is not over");
                    assert!(execute_move(&mut state, mv.from, mv.to));
                }

                assert!(checked > 10, "human={human} seed={seed} ended after {checked} plies");
                let winner = state.winner.expect("finished game has a winner");
                assert_eq!(evaluate(&state, winner), WIN_VALUE);
                assert_eq!(evaluate(&state, winner.opposite()), -WIN_VALUE);
            }
        }
    }

    #[test]
    fn advancement_counts_rows_travelled() {
        let rows = [
            "........",
            "........",
            "........",
            "W.......",
            "........",
            "........",
            "........",
            "........",
        ];
        // White moving toward row 0 has travelled 4 rows from row 7.
        let up = position(&rows, Color::White);
        assert_eq!(quick_evaluate(&up, Color::White), MATERIAL_VALUE + 4 * ADVANCEMENT_VALUE);
        // White moving toward row 7 has travelled 3 rows from row 0.
        let down = position(&rows, Color::Black);
        assert_eq!(quick_evaluate(&down, Color::White), MATERIAL_VALUE + 3 * ADVANCEMENT_VALUE);
    }

    #[test]
    fn mobility_term_counts_both_sides() {
        let rows = [
            "........",
            "...B....",
            "........",
            "........",
            "........",
            "........",
            "W.......",
            "........",
        ];
        let state = position(&rows, Color::White);
        let quick = quick_evaluate(&state, Color::White);
        // White on the edge has 2 moves, Black in the middle has 3.
        assert_eq!(evaluate(&state, Color::White), quick + (2 - 3) * MOBILITY_VALUE);
    }

    #[test]
    fn decided_positions_score_win_value() {
        let mut state = position(
            &[
                "........",
                "W.......",
                "........",
                "........",
                "........",
                "........",
                "...B....",
                "........",
            ],
            Color::White,
        );
        let from = Square::new(1, 0).expect("on board");
        let to = Square::new(0, 0).expect("on board");
        assert!(execute_move(&mut state, from, to));

        assert_eq!(evaluate(&state, Color::White), WIN_VALUE);
        assert_eq!(evaluate(&state, Color::Black), -WIN_VALUE);
        assert_eq!(HeuristicEvaluator.score(&state, Color::Black), -WIN_VALUE);
        assert_eq!(QuickEvaluator.score(&state, Color::White), WIN_VALUE);
    }
}
