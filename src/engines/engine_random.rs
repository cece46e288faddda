//! Random-move engine.
//!
//! Selects uniformly from legal moves; used as a sparring partner in engine
//! matches and for smoke testing.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::BreakthroughResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_validator::all_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Breakthrough Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> BreakthroughResult<EngineOutput> {
        let legal_moves = if game_state.winner.is_some() {
            Vec::new()
        } else {
            all_moves(game_state, game_state.current_player)
        };

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::Color;
    use crate::interface::core_api::new_game;
    use crate::move_generation::move_validator::is_legal;

    #[test]
    fn picks_a_legal_move() {
        let state = new_game(Color::White);
        let mut engine = RandomEngine::seeded(7);
        for _ in 0..20 {
            let out = engine.choose_move(&state).expect("random engine never fails");
            let mv = out.best_move.expect("opening has moves");
            assert!(is_legal(&state, mv.from, mv.to));
        }
    }

    #[test]
    fn same_seed_same_choice() {
        let state = new_game(Color::Black);
        let a = RandomEngine::seeded(99).choose_move(&state).expect("ok");
        let b = RandomEngine::seeded(99).choose_move(&state).expect("ok");
        assert_eq!(a.best_move, b.best_move);
    }

    #[test]
    fn rejects_unknown_options() {
        let mut engine = RandomEngine::seeded(1);
        assert!(engine.set_option("Depth", "3").is_err());
    }
}
