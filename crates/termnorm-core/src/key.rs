//! Terminal-agnostic key codes and modifier sets.

use std::fmt;

use bitflags::bitflags;

/// Special (non-printable) keys.
///
/// Printable input is carried as a rune alongside an absent key code, so this
/// enum only names keys that have no character of their own. The space bar is
/// the exception: it gets a dedicated [`Key::Space`] code so that it never
/// aliases a control code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar.
    Space,
    /// Ctrl+Space (NUL).
    CtrlSpace,
    /// Control code for a letter or one of `\ ] ^ _`, stored lowercase.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Shift+Tab.
    BackTab,
    /// Backspace key.
    Backspace,
    /// Escape key.
    Esc,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Insert key.
    Insert,
    /// Delete key.
    Delete,
    /// Function key `F1..=F24`.
    F(u8),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space => f.write_str("Space"),
            Self::CtrlSpace => f.write_str("Ctrl+Space"),
            Self::Ctrl(c) => write!(f, "Ctrl+{}", c.to_ascii_uppercase()),
            Self::Enter => f.write_str("Enter"),
            Self::Tab => f.write_str("Tab"),
            Self::BackTab => f.write_str("BackTab"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Esc => f.write_str("Esc"),
            Self::Up => f.write_str("Up"),
            Self::Down => f.write_str("Down"),
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
            Self::Home => f.write_str("Home"),
            Self::End => f.write_str("End"),
            Self::PageUp => f.write_str("PageUp"),
            Self::PageDown => f.write_str("PageDown"),
            Self::Insert => f.write_str("Insert"),
            Self::Delete => f.write_str("Delete"),
            Self::F(n) => write!(f, "F{n}"),
        }
    }
}

bitflags! {
    /// Modifier set attached to key and mouse events.
    ///
    /// `MOTION` never comes from the terminal. The translator sets it on mouse
    /// events that belong to an in-progress primary-button drag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift held.
        const SHIFT = 0b0001;
        /// Ctrl held.
        const CTRL = 0b0010;
        /// Alt (or Meta) held.
        const ALT = 0b0100;
        /// Drag in progress.
        const MOTION = 0b1000;
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::CTRL, "Ctrl"),
            (Self::ALT, "Alt"),
            (Self::SHIFT, "Shift"),
            (Self::MOTION, "Motion"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("+")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
