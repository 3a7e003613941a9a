//! crossterm event source.
//!
//! [`convert_event`] maps one crossterm event onto the raw event model. It is
//! pure, so the mapping is unit tested without a terminal. [`TerminalSource`]
//! wraps the blocking crossterm reader as an [`EventSource`].
//!
//! crossterm reports mouse activity as discrete press, release, drag and move
//! events. They are folded back into a position plus a held-button mask: a
//! press or a drag reports its button as held, a release or a bare move
//! reports nothing held. The translator rebuilds click and drag gestures from
//! that mask.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use termnorm_core::{ButtonMask, EventSource, Key, Modifiers, RawEvent, RawKey, RawMouse};

/// How long one blocking read waits before checking for an interrupt.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Convert one crossterm event.
pub fn convert_event(event: Event) -> RawEvent {
    match event {
        Event::Key(key) => convert_key(key),
        Event::Mouse(mouse) => RawEvent::Mouse(convert_mouse(mouse)),
        Event::Resize(width, height) => RawEvent::Resize { width, height },
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => RawEvent::Unrecognized,
    }
}

fn convert_modifiers(modifiers: KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if modifiers.contains(KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if modifiers.intersects(KeyModifiers::ALT | KeyModifiers::META) {
        out |= Modifiers::ALT;
    }
    out
}

/// Characters that have a control code of their own.
fn has_control_code(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '\\' | ']' | '^' | '_')
}

fn convert_key(event: KeyEvent) -> RawEvent {
    if event.kind == KeyEventKind::Release {
        return RawEvent::Unrecognized;
    }

    let modifiers = convert_modifiers(event.modifiers);
    let key = match event.code {
        KeyCode::Char(c) if modifiers.contains(Modifiers::CTRL) && has_control_code(c) => {
            Key::Ctrl(c.to_ascii_lowercase())
        },
        KeyCode::Char(c) => return RawEvent::Key(RawKey::rune(c, modifiers)),
        KeyCode::Null => Key::CtrlSpace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Esc => Key::Esc,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Insert => Key::Insert,
        KeyCode::Delete => Key::Delete,
        KeyCode::F(n) => Key::F(n),
        _ => return RawEvent::Unrecognized,
    };
    RawEvent::Key(RawKey::key(key, modifiers))
}

fn button_mask(button: MouseButton) -> ButtonMask {
    match button {
        MouseButton::Left => ButtonMask::PRIMARY,
        MouseButton::Right => ButtonMask::SECONDARY,
        MouseButton::Middle => ButtonMask::MIDDLE,
    }
}

fn convert_mouse(event: MouseEvent) -> RawMouse {
    let buttons = match event.kind {
        MouseEventKind::Down(button) | MouseEventKind::Drag(button) => button_mask(button),
        MouseEventKind::Up(_) | MouseEventKind::Moved => ButtonMask::empty(),
        MouseEventKind::ScrollUp => ButtonMask::WHEEL_UP,
        MouseEventKind::ScrollDown => ButtonMask::WHEEL_DOWN,
        MouseEventKind::ScrollLeft => ButtonMask::WHEEL_LEFT,
        MouseEventKind::ScrollRight => ButtonMask::WHEEL_RIGHT,
    };
    RawMouse::new(event.column, event.row, buttons)
        .with_modifiers(convert_modifiers(event.modifiers))
}

/// Handle that wakes a blocked [`TerminalSource`] with [`RawEvent::Interrupt`].
#[derive(Debug, Clone, Default)]
pub struct Interrupter {
    flag: Arc<AtomicBool>,
}

impl Interrupter {
    /// Ask the source to deliver an interrupt. Repeated requests before the
    /// source wakes collapse into one.
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Release);
    }

    fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }
}

/// Blocking [`EventSource`] over the process terminal.
///
/// Expects the terminal to be in raw mode; see [`crate::TerminalGuard`].
#[derive(Debug, Default)]
pub struct TerminalSource {
    interrupter: Interrupter,
}

impl TerminalSource {
    /// Source reading from the process terminal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for interrupting a blocked read, usable from another thread.
    pub fn interrupter(&self) -> Interrupter {
        self.interrupter.clone()
    }
}

impl EventSource for TerminalSource {
    fn next_event(&mut self) -> RawEvent {
        loop {
            if self.interrupter.take() {
                return RawEvent::Interrupt;
            }

            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {},
                Err(err) => return RawEvent::Error(err.into()),
            }

            return match event::read() {
                Ok(event) => {
                    let raw = convert_event(event);
                    if raw == RawEvent::Unrecognized {
                        tracing::trace!("ignoring unrecognized terminal event");
                    }
                    raw
                },
                Err(err) => RawEvent::Error(err.into()),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use termnorm_core::RawKeyCode;

    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE })
    }

    #[test]
    fn printable_chars_are_runes() {
        assert_eq!(
            convert_event(key(KeyCode::Char('x'), KeyModifiers::NONE)),
            RawEvent::Key(RawKey::rune('x', Modifiers::empty()))
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            RawEvent::Key(RawKey::rune('X', Modifiers::SHIFT))
        );
    }

    #[test]
    fn ctrl_letters_become_control_codes() {
        assert_eq!(
            convert_event(key(KeyCode::Char('C'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)),
            RawEvent::Key(RawKey::key(Key::Ctrl('c'), Modifiers::CTRL | Modifiers::SHIFT))
        );
    }

    #[test]
    fn ctrl_space_stays_a_rune() {
        let raw = convert_event(key(KeyCode::Char(' '), KeyModifiers::CONTROL));
        let RawEvent::Key(raw) = raw else { panic!("expected a key event") };
        assert_eq!(raw.code, RawKeyCode::Rune);
        assert_eq!(raw.rune, ' ');
        assert_eq!(raw.modifiers, Modifiers::CTRL);
    }

    #[test]
    fn special_keys_and_meta() {
        assert_eq!(
            convert_event(key(KeyCode::F(5), KeyModifiers::META)),
            RawEvent::Key(RawKey::key(Key::F(5), Modifiers::ALT))
        );
        assert_eq!(
            convert_event(key(KeyCode::Null, KeyModifiers::NONE)),
            RawEvent::Key(RawKey::key(Key::CtrlSpace, Modifiers::empty()))
        );
        assert_eq!(
            convert_event(key(KeyCode::CapsLock, KeyModifiers::NONE)),
            RawEvent::Unrecognized
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(convert_event(Event::Key(release)), RawEvent::Unrecognized);
    }

    #[test]
    fn mouse_presses_report_held_buttons() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            RawEvent::Mouse(RawMouse::new(3, 4, ButtonMask::PRIMARY))
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::Drag(MouseButton::Right), 5, 4)),
            RawEvent::Mouse(RawMouse::new(5, 4, ButtonMask::SECONDARY))
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::Up(MouseButton::Left), 5, 4)),
            RawEvent::Mouse(RawMouse::new(5, 4, ButtonMask::empty()))
        );
    }

    #[test]
    fn scroll_sets_wheel_bits() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::ScrollDown, 0, 0)),
            RawEvent::Mouse(RawMouse::new(0, 0, ButtonMask::WHEEL_DOWN))
        );
    }

    #[test]
    fn focus_and_paste_are_unrecognized() {
        assert_eq!(convert_event(Event::FocusGained), RawEvent::Unrecognized);
        assert_eq!(convert_event(Event::Paste("hi".into())), RawEvent::Unrecognized);
    }

    #[test]
    fn interrupts_collapse() {
        let source = TerminalSource::new();
        let handle = source.interrupter();
        handle.interrupt();
        handle.interrupt();
        assert!(source.interrupter.take());
        assert!(!source.interrupter.take());
    }

    #[test]
    fn interrupt_from_another_thread_wakes_the_source() {
        let mut source = TerminalSource::new();
        let handle = source.interrupter();
        std::thread::spawn(move || handle.interrupt()).join().unwrap();

        // A pending interrupt is delivered before the terminal is polled.
        assert_eq!(source.next_event(), RawEvent::Interrupt);
        assert!(!source.interrupter.take());
    }
}
