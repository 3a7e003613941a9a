//! Event inspector session.
//!
//! Prints every normalized event on its own line, coloured by kind through
//! the style encoder, until the user quits or the source fails for good. The
//! session is generic over source and writer so it runs the same against a
//! real terminal and a scripted one.

use std::{io::Write, ops::ControlFlow};

use crossterm::{
    queue,
    style::{Print, PrintStyledContent},
};
use termnorm_core::{
    AttrFlags, Attribute, Color, EventLoop, EventSource, Key, NormalizedEvent, OutputMode,
    encode_style_with,
};

use crate::{TerminalError, style::to_content_style};

/// Consecutive transient errors tolerated before the source is given up on.
pub const MAX_CONSECUTIVE_ERRORS: usize = 16;

/// Returns true for the keys that end an inspector session: `q` and Ctrl+C.
pub fn is_quit(event: &NormalizedEvent) -> bool {
    match event {
        NormalizedEvent::Key { rune: Some('q'), modifiers, .. } => modifiers.is_empty(),
        NormalizedEvent::Key { key: Some(Key::Ctrl('c')), .. } => true,
        _ => false,
    }
}

/// Foreground attribute used to print `event`.
fn highlight(event: &NormalizedEvent) -> Attribute {
    match event {
        NormalizedEvent::None => Attribute::DEFAULT,
        NormalizedEvent::Key { .. } => Color::GREEN | AttrFlags::BOLD,
        NormalizedEvent::Mouse { .. } if event.is_drag() => Color::CYAN | AttrFlags::REVERSE,
        NormalizedEvent::Mouse { .. } => Attribute::new(Color::CYAN),
        NormalizedEvent::Resize { .. } => Attribute::new(Color::YELLOW),
        NormalizedEvent::Interrupt => Color::MAGENTA | AttrFlags::ITALIC,
        NormalizedEvent::Error(_) => Color::RED | AttrFlags::BOLD,
    }
}

fn print_event<W: Write>(
    out: &mut W,
    event: &NormalizedEvent,
    mode: OutputMode,
) -> std::io::Result<()> {
    let style = encode_style_with(highlight(event), Attribute::DEFAULT, mode);
    let line = to_content_style(style).apply(event.to_string());
    // Raw mode: no implicit carriage return.
    queue!(out, PrintStyledContent(line), Print("\r\n"))?;
    out.flush()
}

/// Run an inspector session, returning how many events were printed.
///
/// Non-fatal source errors are printed and the session goes on, unless
/// [`MAX_CONSECUTIVE_ERRORS`] of them arrive in a row. A fatal one ends the
/// session with an error.
pub fn run_inspector<S, W>(
    events: &mut EventLoop<S>,
    out: &mut W,
    mode: OutputMode,
) -> Result<usize, TerminalError>
where
    S: EventSource,
    W: Write,
{
    let mut printed = 0;
    let mut failures = 0;
    events.run(|event| {
        if is_quit(&event) {
            return ControlFlow::Break(Ok(printed));
        }
        if let Err(err) = print_event(out, &event, mode) {
            return ControlFlow::Break(Err(err.into()));
        }
        printed += 1;

        let NormalizedEvent::Error(err) = event else {
            failures = 0;
            return ControlFlow::Continue(());
        };
        failures += 1;
        if err.is_fatal() || failures >= MAX_CONSECUTIVE_ERRORS {
            tracing::warn!(error = %err, failures, "giving up on event source");
            return ControlFlow::Break(Err(TerminalError::Driver(err)));
        }
        ControlFlow::Continue(())
    })
}
