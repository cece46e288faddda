//! Crate-wide error type.
//!
//! Core rule operations report illegal requests through `bool`/`Option`
//! results; this enum covers the fallible helpers around them (parsing,
//! custom positions, engine options, worker handoff).

use crate::game_state::board_types::Square;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BreakthroughError {
    /// A square string such as `"e2"` could not be parsed.
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),

    /// A custom position description was malformed.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// The requested move is not legal in the current position.
    #[error("illegal move {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game already has a winner.
    #[error("game is already over")]
    GameOver,

    /// An engine produced no move although the game was still running.
    #[error("engine {0} returned no move")]
    NoMoveFromEngine(String),

    #[error("unknown engine option: {0}")]
    UnknownOption(String),

    #[error("invalid value {value:?} for engine option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// A background search ended without delivering a result.
    #[error("search worker disconnected before reporting a result")]
    WorkerDisconnected,
}

pub type BreakthroughResult<T> = Result<T, BreakthroughError>;
