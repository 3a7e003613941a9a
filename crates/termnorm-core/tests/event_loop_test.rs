//! Scenario tests running the event loop over scripted raw streams.
//!
//! # Oracle Pattern
//!
//! Each scenario replays a raw event script and checks the exact sequence of
//! normalized events the consumer sees.

use std::ops::ControlFlow;

use termnorm_core::{
    ButtonMask, DriverError, EventLoop, Key, Modifiers, MouseKey, NormalizedEvent, RawEvent,
    RawKey, RawMouse, ScriptedSource,
};

/// Run a script to completion and collect everything the consumer receives.
fn consume(script: Vec<RawEvent>) -> Vec<NormalizedEvent> {
    let mut event_loop = EventLoop::new(ScriptedSource::new(script));
    let mut seen = Vec::new();
    event_loop.run(|event| {
        let closed = event == NormalizedEvent::Error(DriverError::Closed);
        seen.push(event);
        if closed { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    });
    seen
}

fn mouse(column: u16, row: u16, buttons: ButtonMask) -> RawEvent {
    RawEvent::Mouse(RawMouse::new(column, row, buttons))
}

fn mouse_event(column: u16, row: u16, key: MouseKey, modifiers: Modifiers) -> NormalizedEvent {
    NormalizedEvent::Mouse { column, row, key, modifiers }
}

#[test]
fn drag_selection_scenario() {
    let seen = consume(vec![
        mouse(10, 5, ButtonMask::empty()),
        mouse(10, 5, ButtonMask::PRIMARY),
        mouse(11, 5, ButtonMask::PRIMARY),
        mouse(12, 5, ButtonMask::PRIMARY),
        mouse(13, 6, ButtonMask::PRIMARY),
        mouse(13, 6, ButtonMask::empty()),
        mouse(14, 6, ButtonMask::empty()),
    ]);

    assert_eq!(
        seen,
        vec![
            mouse_event(10, 5, MouseKey::Left, Modifiers::empty()),
            mouse_event(11, 5, MouseKey::Release, Modifiers::empty()),
            mouse_event(12, 5, MouseKey::Left, Modifiers::MOTION),
            mouse_event(13, 6, MouseKey::Left, Modifiers::MOTION),
            mouse_event(13, 6, MouseKey::Release, Modifiers::empty()),
            NormalizedEvent::Error(DriverError::Closed),
        ]
    );
}

#[test]
fn scroll_while_dragging_scenario() {
    let seen = consume(vec![
        mouse(0, 0, ButtonMask::PRIMARY),
        mouse(0, 1, ButtonMask::PRIMARY),
        mouse(0, 1, ButtonMask::PRIMARY | ButtonMask::WHEEL_UP),
        mouse(0, 2, ButtonMask::PRIMARY),
    ]);

    assert_eq!(
        seen,
        vec![
            mouse_event(0, 0, MouseKey::Left, Modifiers::empty()),
            mouse_event(0, 1, MouseKey::Release, Modifiers::empty()),
            mouse_event(0, 1, MouseKey::WheelUp, Modifiers::empty()),
            mouse_event(0, 2, MouseKey::Left, Modifiers::MOTION),
            NormalizedEvent::Error(DriverError::Closed),
        ]
    );
}

#[test]
fn mixed_input_scenario() {
    let seen = consume(vec![
        RawEvent::Resize { width: 80, height: 24 },
        RawEvent::Key(RawKey::rune('j', Modifiers::empty())),
        RawEvent::Unrecognized,
        RawEvent::Key(RawKey::key(Key::Ctrl('c'), Modifiers::CTRL)),
        mouse(3, 3, ButtonMask::MIDDLE),
        mouse(3, 3, ButtonMask::empty()),
        RawEvent::Interrupt,
    ]);

    assert_eq!(
        seen,
        vec![
            NormalizedEvent::Resize { width: 80, height: 24 },
            NormalizedEvent::Key { key: None, rune: Some('j'), modifiers: Modifiers::empty() },
            NormalizedEvent::Key { key: Some(Key::Ctrl('c')), rune: None, modifiers: Modifiers::empty() },
            mouse_event(3, 3, MouseKey::Middle, Modifiers::empty()),
            mouse_event(3, 3, MouseKey::Release, Modifiers::empty()),
            NormalizedEvent::Interrupt,
            NormalizedEvent::Error(DriverError::Closed),
        ]
    );
}

#[test]
fn transient_errors_do_not_stop_the_loop() {
    let mut event_loop = EventLoop::new(ScriptedSource::new([
        RawEvent::Error(DriverError::Io("interrupted".into())),
        RawEvent::Key(RawKey::rune('x', Modifiers::ALT)),
    ]));

    let mut errors = 0;
    let last = event_loop.run(|event| match event {
        NormalizedEvent::Error(err) if err.is_fatal() => ControlFlow::Break(None),
        NormalizedEvent::Error(_) => {
            errors += 1;
            ControlFlow::Continue(())
        },
        other => ControlFlow::Break(Some(other)),
    });

    assert_eq!(errors, 1);
    assert_eq!(
        last,
        Some(NormalizedEvent::Key { key: None, rune: Some('x'), modifiers: Modifiers::ALT })
    );
    assert_eq!(event_loop.source_mut().remaining(), 0);
}
