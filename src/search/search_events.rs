//! Observation hooks for a running search.
//!
//! Observers see every candidate move and every leaf score. They are purely
//! informational and cannot influence the result. `ChannelObserver` forwards
//! events with `try_send`, so the search never blocks: on a bounded channel
//! events are dropped while the buffer is full.

use crossbeam_channel::Sender;

use crate::game_state::board_types::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// A candidate move is about to be explored at some ply.
    MoveConsidered(Move),
    /// A leaf or terminal node was statically evaluated.
    LeafEvaluated(i32),
}

pub trait SearchObserver {
    fn on_move_considered(&mut self, _mv: Move) {}
    fn on_leaf_evaluated(&mut self, _score: i32) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Adapts a closure into an observer.
pub struct FnObserver<F: FnMut(SearchEvent)>(pub F);

impl<F: FnMut(SearchEvent)> SearchObserver for FnObserver<F> {
    fn on_move_considered(&mut self, mv: Move) {
        (self.0)(SearchEvent::MoveConsidered(mv));
    }

    fn on_leaf_evaluated(&mut self, score: i32) {
        (self.0)(SearchEvent::LeafEvaluated(score));
    }
}

#[derive(Debug, Clone)]
pub struct ChannelObserver {
    sender: Sender<SearchEvent>,
    forward_leaves: bool,
}

impl ChannelObserver {
    /// Forwards candidate moves only.
    pub fn new(sender: Sender<SearchEvent>) -> Self {
        Self {
            sender,
            forward_leaves: false,
        }
    }

    /// Forwards candidate moves and leaf scores.
    pub fn with_leaf_scores(sender: Sender<SearchEvent>) -> Self {
        Self {
            sender,
            forward_leaves: true,
        }
    }

    #[inline]
    fn push(&self, event: SearchEvent) {
        // Full buffer or dropped receiver: the event is discarded.
        let _ = self.sender.try_send(event);
    }
}

impl SearchObserver for ChannelObserver {
    fn on_move_considered(&mut self, mv: Move) {
        self.push(SearchEvent::MoveConsidered(mv));
    }

    fn on_leaf_evaluated(&mut self, score: i32) {
        if self.forward_leaves {
            self.push(SearchEvent::LeafEvaluated(score));
        }
    }
}
