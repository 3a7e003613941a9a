//! Raw-to-normalized event translation.
//!
//! [`Translator`] converts one [`RawEvent`] into exactly one
//! [`NormalizedEvent`]. Key, resize and interrupt translation is pure; mouse
//! translation goes through the translator's own [`GestureState`], so several
//! translators can coexist and be tested in isolation.

use crate::{
    GestureState, Key, Modifiers, NormalizedEvent, RawEvent, RawKey, RawKeyCode,
    gesture::DragPhase,
};

/// Stateful raw event translator.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    gesture: GestureState,
}

impl Translator {
    /// Translator with an idle gesture state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gesture memory, for inspection.
    pub fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Current drag phase.
    pub fn drag_phase(&self) -> DragPhase {
        self.gesture.phase()
    }

    /// Translate one raw event.
    pub fn translate(&mut self, raw: RawEvent) -> NormalizedEvent {
        match raw {
            RawEvent::Interrupt => NormalizedEvent::Interrupt,
            RawEvent::Resize { width, height } => NormalizedEvent::Resize { width, height },
            RawEvent::Key(key) => translate_key(key),
            RawEvent::Mouse(mouse) => self.gesture.step(mouse),
            RawEvent::Error(err) => {
                tracing::debug!(error = %err, "passing driver error through");
                NormalizedEvent::Error(err)
            },
            RawEvent::Unrecognized => NormalizedEvent::None,
        }
    }
}

/// Translate a raw keystroke.
///
/// A rune replaces the raw code, except the space bar which gets the
/// dedicated [`Key::Space`] code. Modifiers are then resolved in order:
///
/// 1. exactly Ctrl on [`Key::Space`] becomes [`Key::CtrlSpace`] with no
///    modifiers;
/// 2. exactly Ctrl or exactly Shift is dropped, since the driver already
///    folded it into the key code or the rune's case;
/// 3. anything else passes through.
pub fn translate_key(raw: RawKey) -> NormalizedEvent {
    let (mut key, mut rune) = match raw.code {
        RawKeyCode::Rune if raw.rune == ' ' => (Some(Key::Space), None),
        RawKeyCode::Rune => (None, Some(raw.rune)),
        RawKeyCode::Key(key) => (Some(key), None),
    };

    let mut modifiers = raw.modifiers;
    if modifiers == Modifiers::CTRL && key == Some(Key::Space) {
        key = Some(Key::CtrlSpace);
        rune = None;
        modifiers = Modifiers::empty();
    } else if modifiers == Modifiers::CTRL || modifiers == Modifiers::SHIFT {
        modifiers = Modifiers::empty();
    }

    NormalizedEvent::Key { key, rune, modifiers }
}
