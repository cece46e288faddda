//! Alpha-beta minimax engine at a fixed search depth.

use tracing::debug;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::game_state::GameState;
use crate::interface::core_api::compute_ai_move;
use crate::interface::difficulty::{SearchConfig, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH};
use crate::utils::metrics_report::with_thousands_separators;

pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    /// Depth is clamped to the supported range.
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig::clamped(depth),
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config = SearchConfig::clamped(depth);
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Breakthrough Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> BreakthroughResult<()> {
        if !name.eq_ignore_ascii_case("depth") {
            return Err(BreakthroughError::UnknownOption(name.to_owned()));
        }

        let invalid = || BreakthroughError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        let depth: u8 = value.trim().parse().map_err(|_| invalid())?;
        if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&depth) {
            return Err(invalid());
        }

        debug!(depth, "minimax engine depth set");
        self.set_depth(depth);
        Ok(())
    }

    fn choose_move(&mut self, game_state: &GameState) -> BreakthroughResult<EngineOutput> {
        let report = compute_ai_move(game_state, game_state.current_player, self.config.depth);

        let mut out = EngineOutput {
            best_move: report.best_move,
            score: Some(report.score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}ms",
            report.depth,
            report.score,
            with_thousands_separators(report.nodes_visited),
            report.elapsed.as_millis()
        ));
        if let Some(factor) = report.branching_factor {
            out.info_lines
                .push(format!("info string branching_factor {factor:.2}"));
        }

        Ok(out)
    }
}
