//! Fuzz target for the raw event Translator
//!
//! Drive the gesture state machine with arbitrary mouse and key streams
//!
//! # Strategy
//!
//! - Button masks: arbitrary combinations of buttons and wheel bits
//! - Positions: a small grid so presses and motion often coincide
//! - Keys: arbitrary runes, special keys and modifier sets
//! - Interleaving: resize, interrupt and error events between gestures
//!
//! # Invariants
//!
//! - Wheel events never change the drag phase
//! - MOTION is only reported while the state machine is Dragging
//! - A key event carries a key code or a rune, never both
//! - A rune other than space is never turned into a key code
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termnorm_core::{
    ButtonMask, DragPhase, DriverError, Key, Modifiers, NormalizedEvent, RawEvent, RawKey,
    RawKeyCode, RawMouse, Translator,
};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Mouse { column: u8, row: u8, buttons: u16, modifiers: u8 },
    Rune { rune: char, modifiers: u8 },
    Special { key: SpecialKey, modifiers: u8 },
    Resize { width: u16, height: u16 },
    Interrupt,
    Error { kind: u8 },
    Unrecognized,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum SpecialKey {
    Space,
    Ctrl(u8),
    Enter,
    Esc,
    Up,
    F(u8),
}

impl SpecialKey {
    fn key(self) -> Key {
        match self {
            SpecialKey::Space => Key::Space,
            SpecialKey::Ctrl(n) => Key::Ctrl(char::from(b'a' + n % 26)),
            SpecialKey::Enter => Key::Enter,
            SpecialKey::Esc => Key::Esc,
            SpecialKey::Up => Key::Up,
            SpecialKey::F(n) => Key::F(n % 24 + 1),
        }
    }
}

fn raw_modifiers(bits: u8) -> Modifiers {
    // The terminal never reports MOTION.
    Modifiers::from_bits_truncate(bits) - Modifiers::MOTION
}

fn to_raw(op: &Op) -> RawEvent {
    match *op {
        Op::Mouse { column, row, buttons, modifiers } => {
            let buttons = ButtonMask::from_bits_truncate(buttons);
            let mouse = RawMouse::new(u16::from(column % 8), u16::from(row % 8), buttons);
            RawEvent::Mouse(mouse.with_modifiers(raw_modifiers(modifiers)))
        },
        Op::Rune { rune, modifiers } => RawEvent::Key(RawKey::rune(rune, raw_modifiers(modifiers))),
        Op::Special { key, modifiers } => {
            RawEvent::Key(RawKey::key(key.key(), raw_modifiers(modifiers)))
        },
        Op::Resize { width, height } => RawEvent::Resize { width, height },
        Op::Interrupt => RawEvent::Interrupt,
        Op::Error { kind } => RawEvent::Error(match kind % 3 {
            0 => DriverError::Io("fuzz".into()),
            1 => DriverError::Broken("fuzz".into()),
            _ => DriverError::Closed,
        }),
        Op::Unrecognized => RawEvent::Unrecognized,
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut translator = Translator::new();

    for op in &ops {
        let raw = to_raw(op);
        let before = translator.drag_phase();
        let event = translator.translate(raw.clone());
        let after = translator.drag_phase();

        match (&raw, &event) {
            (RawEvent::Mouse(mouse), NormalizedEvent::Mouse { key, .. }) if key.is_wheel() => {
                assert!(mouse.buttons.intersects(ButtonMask::WHEEL));
                assert_eq!(before, after, "wheel event changed the drag phase");
            },
            (RawEvent::Mouse(_), NormalizedEvent::Mouse { modifiers, .. }) => {
                if modifiers.contains(Modifiers::MOTION) {
                    assert_eq!(before, DragPhase::Dragging, "MOTION outside a drag");
                }
            },
            (RawEvent::Mouse(_), NormalizedEvent::None) => {},
            (RawEvent::Key(raw_key), NormalizedEvent::Key { key, rune, .. }) => {
                assert!(key.is_none() || rune.is_none(), "key and rune both set");
                if raw_key.code == RawKeyCode::Rune && raw_key.rune != ' ' {
                    assert_eq!(*rune, Some(raw_key.rune));
                }
            },
            (RawEvent::Resize { .. }, NormalizedEvent::Resize { .. })
            | (RawEvent::Interrupt, NormalizedEvent::Interrupt)
            | (RawEvent::Unrecognized, NormalizedEvent::None) => {},
            (RawEvent::Error(cause), NormalizedEvent::Error(passed)) => assert_eq!(cause, passed),
            (raw, event) => panic!("{raw:?} translated to {event:?}"),
        }
    }
});
