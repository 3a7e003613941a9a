//! Application-facing normalized events.
//!
//! This module defines [`NormalizedEvent`], the single event representation
//! the application's dispatch loop consumes. Every variant carries only the
//! fields that are meaningful for it.

use std::fmt;

use crate::{DriverError, Key, Modifiers};

/// Mouse key reported on a normalized mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseKey {
    /// Primary button press, or an in-progress drag (with [`Modifiers::MOTION`]).
    Left,
    /// Secondary button press.
    Right,
    /// Middle button press.
    Middle,
    /// Whatever button was held has been released.
    Release,
    /// Wheel scrolled up.
    WheelUp,
    /// Wheel scrolled down.
    WheelDown,
    /// Wheel scrolled left.
    WheelLeft,
    /// Wheel scrolled right.
    WheelRight,
}

impl MouseKey {
    /// Returns true for the four wheel directions.
    pub fn is_wheel(self) -> bool {
        matches!(self, Self::WheelUp | Self::WheelDown | Self::WheelLeft | Self::WheelRight)
    }
}

/// Event produced by the [`crate::Translator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedEvent {
    /// No actionable event; the consumer keeps polling.
    None,

    /// Keystroke.
    Key {
        /// Special key, absent when `rune` carries the key.
        key: Option<Key>,
        /// Printable rune, absent for special keys.
        rune: Option<char>,
        /// Modifiers left after folding Ctrl/Shift into the key or rune.
        modifiers: Modifiers,
    },

    /// Terminal resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Mouse press, release, drag or wheel.
    Mouse {
        /// 0-based column.
        column: u16,
        /// 0-based row.
        row: u16,
        /// Which mouse key this event reports.
        key: MouseKey,
        /// Modifiers; contains [`Modifiers::MOTION`] during a drag.
        modifiers: Modifiers,
    },

    /// The blocking poll was interrupted.
    Interrupt,

    /// The driver failed; the cause is passed through unmodified.
    Error(DriverError),
}

impl NormalizedEvent {
    /// Returns true for [`NormalizedEvent::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns true if this is a mouse event reporting an in-progress drag.
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            Self::Mouse { key: MouseKey::Left, modifiers, .. } if modifiers.contains(Modifiers::MOTION)
        )
    }
}

impl fmt::Display for NormalizedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Key { key, rune, modifiers } => {
                f.write_str("key ")?;
                if !modifiers.is_empty() {
                    write!(f, "{modifiers}+")?;
                }
                match (key, rune) {
                    (Some(key), _) => write!(f, "{key}"),
                    (None, Some(rune)) => write!(f, "{rune:?}"),
                    (None, None) => f.write_str("?"),
                }
            },
            Self::Resize { width, height } => write!(f, "resize {width}x{height}"),
            Self::Mouse { column, row, key, modifiers } => {
                write!(f, "mouse {key:?} at ({column}, {row})")?;
                if !modifiers.is_empty() {
                    write!(f, " [{modifiers}]")?;
                }
                Ok(())
            },
            Self::Interrupt => f.write_str("interrupt"),
            Self::Error(err) => write!(f, "error: {err}"),
        }
    }
}
