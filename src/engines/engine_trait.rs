//! Engine abstraction used by the match harness and the terminal game.
//!
//! Different move-selection strategies sit behind one trait so callers can
//! pick an opponent at runtime.

use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::board_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Score from the mover's perspective, when the engine computes one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> BreakthroughResult<()> {
        Err(BreakthroughError::UnknownOption(name.to_owned()))
    }

    /// Pick a move for the side to move in `game_state`.
    fn choose_move(&mut self, game_state: &GameState) -> BreakthroughResult<EngineOutput>;
}
