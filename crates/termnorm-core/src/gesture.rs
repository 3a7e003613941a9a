//! Click-versus-drag recognition for raw mouse events.
//!
//! The raw stream reports the held buttons on every event. [`GestureState`]
//! remembers which button went down, where the primary button was pressed and
//! whether the pointer has moved since, and turns that into press, release and
//! drag events.
//!
//! # Phases
//!
//! ```text
//!            primary press                 moved away from anchor
//!   Idle ─────────────────────▶ Armed ─────────────────────────────▶ Dragging
//!    ▲                            │                                      │
//!    └────────── release ─────────┴──────────────── release ─────────────┘
//! ```
//!
//! Only the primary button arms a drag. Secondary and middle buttons produce
//! press and release events but never enter [`DragPhase::Armed`].

use crate::{ButtonMask, Modifiers, MouseKey, NormalizedEvent, RawMouse};

/// Drag recognition phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    /// No primary-button gesture in progress.
    #[default]
    Idle,
    /// Primary button down, pointer has not moved from the press position.
    Armed,
    /// Primary button down and the pointer has moved.
    Dragging,
}

/// A plain (non-wheel) mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) button.
    Primary,
    /// Secondary (right) button.
    Secondary,
    /// Middle button.
    Middle,
}

impl MouseButton {
    /// The button a press is attributed to when the mask holds several.
    ///
    /// Priority is Primary, then Secondary, then Middle.
    pub fn from_mask(mask: ButtonMask) -> Option<Self> {
        if mask.contains(ButtonMask::PRIMARY) {
            Some(Self::Primary)
        } else if mask.contains(ButtonMask::SECONDARY) {
            Some(Self::Secondary)
        } else if mask.contains(ButtonMask::MIDDLE) {
            Some(Self::Middle)
        } else {
            None
        }
    }

    fn mouse_key(self) -> MouseKey {
        match self {
            Self::Primary => MouseKey::Left,
            Self::Secondary => MouseKey::Right,
            Self::Middle => MouseKey::Middle,
        }
    }
}

/// Wheel direction encoded in a mask. The last of Up, Down, Left, Right wins.
fn wheel_key(mask: ButtonMask) -> Option<MouseKey> {
    [
        (ButtonMask::WHEEL_RIGHT, MouseKey::WheelRight),
        (ButtonMask::WHEEL_LEFT, MouseKey::WheelLeft),
        (ButtonMask::WHEEL_DOWN, MouseKey::WheelDown),
        (ButtonMask::WHEEL_UP, MouseKey::WheelUp),
    ]
    .into_iter()
    .find_map(|(bit, key)| mask.contains(bit).then_some(key))
}

/// The button considered held, with the modifiers seen at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    button: MouseButton,
    modifiers: Modifiers,
}

/// What the button bookkeeping observed on one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// No press or release; pointer motion or a held button being re-reported.
    Motion,
    /// A button went down while none was held.
    Press(MouseButton, Modifiers),
    /// The held button was released; carries the press-time modifiers.
    Release(Modifiers),
}

/// Gesture memory carried across raw mouse events.
///
/// Owned by a [`crate::Translator`]. Not shared: the transitions are not
/// idempotent, so concurrent producers must serialize the whole
/// translate-and-mutate step behind one lock.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    phase: DragPhase,
    held: Option<Held>,
    anchor: (u16, u16),
}

impl GestureState {
    /// Idle state with no held button.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Button currently considered held, if any.
    pub fn held_button(&self) -> Option<MouseButton> {
        self.held.map(|held| held.button)
    }

    /// Position of the last primary-button press (column, row).
    pub fn anchor(&self) -> (u16, u16) {
        self.anchor
    }

    /// Process one raw mouse event.
    pub fn step(&mut self, mouse: RawMouse) -> NormalizedEvent {
        let RawMouse { column, row, buttons, .. } = mouse;

        // Wheel motion bypasses the drag machine entirely.
        if let Some(key) = wheel_key(buttons) {
            return NormalizedEvent::Mouse { column, row, key, modifiers: Modifiers::empty() };
        }

        let before = self.phase;
        let outcome = self.track_buttons(mouse);
        let (phase, event) = transition(self.phase, self.anchor, (column, row), outcome);
        self.phase = phase;
        if phase != before {
            tracing::trace!(from = ?before, to = ?phase, column, row, "drag phase changed");
        }
        event
    }

    /// Press/release bookkeeping. Arms the drag machine on a primary press
    /// and disarms it when the primary button is released.
    fn track_buttons(&mut self, mouse: RawMouse) -> Outcome {
        let buttons = mouse.buttons.without_wheel();

        if let Some(button) = MouseButton::from_mask(buttons)
            && self.held.is_none()
        {
            self.held = Some(Held { button, modifiers: mouse.modifiers });
            if button == MouseButton::Primary {
                self.phase = DragPhase::Armed;
                self.anchor = (mouse.column, mouse.row);
            }
            return Outcome::Press(button, mouse.modifiers);
        }

        if buttons.is_empty()
            && let Some(held) = self.held.take()
        {
            if held.button == MouseButton::Primary {
                self.phase = DragPhase::Idle;
            }
            return Outcome::Release(held.modifiers);
        }

        Outcome::Motion
    }
}

/// Single drag-phase transition, evaluated once per raw event.
///
/// Returns the next phase and the event to emit. The event that moves the
/// pointer off the anchor while [`DragPhase::Armed`] switches to
/// [`DragPhase::Dragging`] but is still reported with armed semantics; drag
/// events start with the following raw event.
///
/// Armed has no suppression of its own: an event that is neither a press nor
/// a release is reported as a bare [`MouseKey::Release`] with no modifiers.
/// Only [`DragPhase::Idle`] turns pure motion into [`NormalizedEvent::None`].
fn transition(
    phase: DragPhase,
    anchor: (u16, u16),
    position: (u16, u16),
    outcome: Outcome,
) -> (DragPhase, NormalizedEvent) {
    let (column, row) = position;
    let emit =
        |key: MouseKey, modifiers: Modifiers| NormalizedEvent::Mouse { column, row, key, modifiers };
    let report = |outcome: Outcome| match outcome {
        Outcome::Motion => NormalizedEvent::None,
        Outcome::Press(button, modifiers) => emit(MouseButton::mouse_key(button), modifiers),
        Outcome::Release(modifiers) => emit(MouseKey::Release, modifiers),
    };

    match phase {
        DragPhase::Idle => (DragPhase::Idle, report(outcome)),
        DragPhase::Armed => {
            let next = if position == anchor { DragPhase::Armed } else { DragPhase::Dragging };
            let event = match outcome {
                Outcome::Motion => emit(MouseKey::Release, Modifiers::empty()),
                _ => report(outcome),
            };
            (next, event)
        },
        DragPhase::Dragging => (DragPhase::Dragging, emit(MouseKey::Left, Modifiers::MOTION)),
    }
}
