//! Background engine turn.
//!
//! The search runs on its own thread over a private copy of the position.
//! Progress events stream through one channel and the final report arrives
//! on another, so an interactive caller can keep drawing while it polls
//! `try_result` or simply block on `wait`. The progress channel holds at most
//! `PROGRESS_CAPACITY` events; further events are dropped until the caller
//! drains it. There is no cancellation: once spawned, the search completes at
//! the requested depth.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, never, Receiver, TryRecvError};
use tracing::debug;

use crate::errors::{BreakthroughError, BreakthroughResult};
use crate::game_state::board_types::Color;
use crate::game_state::game_state::GameState;
use crate::interface::core_api::{compute_ai_move_observed, AiMoveReport};
use crate::search::search_events::{ChannelObserver, SearchEvent};

/// Progress events buffered for a caller that has not drained them yet.
pub const PROGRESS_CAPACITY: usize = 256;

pub struct AiWorker;

impl AiWorker {
    /// Start searching `state` for `player` at `depth` plies.
    pub fn spawn(state: &GameState, player: Color, depth: u8) -> AiSearchHandle {
        let snapshot = state.clone();
        let (progress_tx, progress_rx) = bounded(PROGRESS_CAPACITY);
        let (result_tx, result_rx) = bounded(1);

        let join = thread::spawn(move || {
            let mut observer = ChannelObserver::new(progress_tx);
            let report = compute_ai_move_observed(&snapshot, player, depth, &mut observer);
            // The handle may already be gone; the report is then unwanted.
            let _ = result_tx.send(report);
        });

        debug!(%player, depth, "spawned background search");

        AiSearchHandle {
            progress: progress_rx,
            result: result_rx,
            join: Some(join),
        }
    }
}

pub struct AiSearchHandle {
    progress: Receiver<SearchEvent>,
    result: Receiver<AiMoveReport>,
    join: Option<JoinHandle<()>>,
}

impl AiSearchHandle {
    /// Candidate moves as the search considers them.
    pub fn progress(&self) -> &Receiver<SearchEvent> {
        &self.progress
    }

    /// Non-blocking poll. `Ok(None)` while the search is still running.
    pub fn try_result(&mut self) -> BreakthroughResult<Option<AiMoveReport>> {
        match self.result.try_recv() {
            Ok(report) => {
                self.reap();
                Ok(Some(report))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.reap();
                Err(BreakthroughError::WorkerDisconnected)
            }
        }
    }

    /// Block until the search finishes. Progress is no longer collected.
    pub fn wait(mut self) -> BreakthroughResult<AiMoveReport> {
        self.progress = never();
        let report = self
            .result
            .recv()
            .map_err(|_| BreakthroughError::WorkerDisconnected);
        self.reap();
        report
    }

    fn reap(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}
