//! Scripted event source for deterministic simulation.
//!
//! `ScriptedSource` replays a fixed queue of raw events through the same
//! [`EventSource`] interface the terminal shell implements, so the
//! [`crate::EventLoop`] code under test is the code that runs in production.

use std::collections::VecDeque;

use crate::{DriverError, EventSource, RawEvent};

/// Replays queued raw events, then reports [`DriverError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pending: VecDeque<RawEvent>,
    delivered: usize,
}

impl ScriptedSource {
    /// Source that will deliver `events` in order.
    pub fn new(events: impl IntoIterator<Item = RawEvent>) -> Self {
        Self { pending: events.into_iter().collect(), delivered: 0 }
    }

    /// Queue another event after the ones already pending.
    pub fn push(&mut self, event: RawEvent) {
        self.pending.push_back(event);
    }

    /// Number of events still queued.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Number of events delivered so far, not counting the closing error.
    pub fn delivered(&self) -> usize {
        self.delivered
    }
}

impl EventSource for ScriptedSource {
    fn next_event(&mut self) -> RawEvent {
        match self.pending.pop_front() {
            Some(event) => {
                self.delivered += 1;
                event
            },
            None => RawEvent::Error(DriverError::Closed),
        }
    }
}
