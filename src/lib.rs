//! Crate root module declarations for the Breakthrough engine.
//!
//! Exposes the game state, move validation, rules, search, engines and the
//! front-end boundary so the terminal binary, the match tooling and the
//! benches all import the same module paths.

pub mod game_state {
    pub mod board_types;
    pub mod game_state;
    pub mod orientation;
}

pub mod move_generation {
    pub mod move_validator;
    pub mod perft;
}

pub mod rules {
    pub mod game_rules;
}

pub mod search {
    pub mod minimax;
    pub mod position_evaluator;
    pub mod search_events;
}

pub mod engines {
    pub mod ai_worker;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod interface {
    pub mod core_api;
    pub mod difficulty;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod metrics_report;
    pub mod render_game_state;
    pub mod square_notation;
}

pub mod errors;
