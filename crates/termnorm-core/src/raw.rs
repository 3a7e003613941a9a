//! Raw terminal events, as reported by the terminal-control layer.
//!
//! This is the input side of the [`crate::Translator`]. The model mirrors
//! what a cell-grid terminal driver reports: per-event key codes with an
//! optional rune, and mouse events as a position plus a button mask. The raw
//! stream does not tell "button just went down" apart from "button still
//! held", and has no notion of a drag.

use bitflags::bitflags;

use crate::{DriverError, Key, Modifiers};

/// One event from the raw event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEvent {
    /// The blocking poll was interrupted on purpose.
    Interrupt,

    /// Terminal resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Keystroke.
    Key(RawKey),

    /// Mouse press, release, motion or wheel.
    Mouse(RawMouse),

    /// The driver failed.
    Error(DriverError),

    /// Anything the driver reports that has no normalized counterpart
    /// (focus changes, paste payloads, ...).
    Unrecognized,
}

/// Key code as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawKeyCode {
    /// The event carries a printable rune; the code itself is meaningless.
    Rune,
    /// A special key.
    Key(Key),
}

/// Raw keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawKey {
    /// Driver key code.
    pub code: RawKeyCode,
    /// Rune, meaningful only when `code` is [`RawKeyCode::Rune`].
    pub rune: char,
    /// Modifiers as reported by the driver.
    pub modifiers: Modifiers,
}

impl RawKey {
    /// A printable rune with the given modifiers.
    pub fn rune(rune: char, modifiers: Modifiers) -> Self {
        Self { code: RawKeyCode::Rune, rune, modifiers }
    }

    /// A special key with the given modifiers.
    pub fn key(key: Key, modifiers: Modifiers) -> Self {
        Self { code: RawKeyCode::Key(key), rune: '\0', modifiers }
    }
}

bitflags! {
    /// Buttons and wheel directions reported on a raw mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ButtonMask: u16 {
        /// Primary (usually left) button.
        const PRIMARY = 0x01;
        /// Secondary (usually right) button.
        const SECONDARY = 0x02;
        /// Middle button.
        const MIDDLE = 0x04;
        /// Wheel scrolled up.
        const WHEEL_UP = 0x100;
        /// Wheel scrolled down.
        const WHEEL_DOWN = 0x200;
        /// Wheel scrolled left.
        const WHEEL_LEFT = 0x400;
        /// Wheel scrolled right.
        const WHEEL_RIGHT = 0x800;
    }
}

impl ButtonMask {
    /// All wheel direction bits.
    pub const WHEEL: Self = Self::WHEEL_UP
        .union(Self::WHEEL_DOWN)
        .union(Self::WHEEL_LEFT)
        .union(Self::WHEEL_RIGHT);

    /// The mask with wheel bits removed, leaving plain buttons.
    pub fn without_wheel(self) -> Self {
        self.difference(Self::WHEEL)
    }
}

/// Raw mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawMouse {
    /// 0-based column.
    pub column: u16,
    /// 0-based row.
    pub row: u16,
    /// Buttons held and wheel motion for this event.
    pub buttons: ButtonMask,
    /// Modifiers held during the event.
    pub modifiers: Modifiers,
}

impl RawMouse {
    /// Mouse event at a position with no modifiers.
    pub fn new(column: u16, row: u16, buttons: ButtonMask) -> Self {
        Self { column, row, buttons, modifiers: Modifiers::empty() }
    }

    /// Attach modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_wheel_keeps_buttons() {
        let mask = ButtonMask::PRIMARY | ButtonMask::WHEEL_UP | ButtonMask::WHEEL_RIGHT;
        assert_eq!(mask.without_wheel(), ButtonMask::PRIMARY);
        assert!(ButtonMask::WHEEL.without_wheel().is_empty());
    }
}
