//! Synchronous pull loop over a raw event source.
//!
//! The [`EventSource`] trait decouples translation from any specific terminal
//! library. The terminal shell implements it over crossterm, tests and fuzzers
//! use [`crate::ScriptedSource`]. [`EventLoop`] runs the same
//! fetch-translate-dispatch cycle over either.

use std::ops::ControlFlow;

use crate::{NormalizedEvent, RawEvent, Translator};

/// Blocking source of raw terminal events.
///
/// Failures are delivered in-band as [`RawEvent::Error`], so the translator
/// can pass them through to the consumer like any other event.
pub trait EventSource {
    /// Block until the next raw event is available.
    fn next_event(&mut self) -> RawEvent;
}

impl<S: EventSource + ?Sized> EventSource for &mut S {
    fn next_event(&mut self) -> RawEvent {
        (**self).next_event()
    }
}

/// Fetch-translate-dispatch loop.
///
/// Single-threaded and pull-based: each cycle blocks on the source, translates
/// the raw event and hands the result to the caller before fetching again.
#[derive(Debug)]
pub struct EventLoop<S> {
    source: S,
    translator: Translator,
}

impl<S: EventSource> EventLoop<S> {
    /// Create a loop over `source` with a fresh translator.
    pub fn new(source: S) -> Self {
        Self { source, translator: Translator::new() }
    }

    /// Translator state, for inspection.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Fetch and translate one raw event. May return [`NormalizedEvent::None`].
    pub fn poll(&mut self) -> NormalizedEvent {
        let raw = self.source.next_event();
        self.translator.translate(raw)
    }

    /// Run until `handler` breaks.
    ///
    /// [`NormalizedEvent::None`] is never handed to `handler`. Errors are, and
    /// the handler decides whether to stop; this loop never retries on its
    /// own.
    pub fn run<B, F>(&mut self, mut handler: F) -> B
    where
        F: FnMut(NormalizedEvent) -> ControlFlow<B>,
    {
        loop {
            let event = self.poll();
            if event.is_none() {
                continue;
            }
            if let ControlFlow::Break(value) = handler(event) {
                return value;
            }
        }
    }

    /// Consume the loop, returning the source.
    pub fn into_source(self) -> S {
        self.source
    }
}
