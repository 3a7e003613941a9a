//! Terminal input normalization core
//!
//! Sans-IO state machines that turn raw terminal events into a stable,
//! application-facing event representation, enabling deterministic
//! simulation testing with the same code that runs against a real terminal.
//!
//! # Components
//!
//! - [`Translator`]: raw event to [`NormalizedEvent`], with click/drag
//!   recognition in [`GestureState`]
//! - [`encode_style`]: foreground/background [`Attribute`] pair to [`Style`]
//! - [`EventSource`]: trait for platform-specific raw event sources
//! - [`EventLoop`]: synchronous fetch-translate-dispatch loop
//! - [`ScriptedSource`]: replayable source for tests and fuzzing

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod event;
pub mod gesture;
mod key;
mod poll;
mod raw;
mod scripted;
pub mod style;
mod translator;

pub use error::DriverError;
pub use event::{MouseKey, NormalizedEvent};
pub use gesture::{DragPhase, GestureState, MouseButton};
pub use key::{Key, Modifiers};
pub use poll::{EventLoop, EventSource};
pub use raw::{ButtonMask, RawEvent, RawKey, RawKeyCode, RawMouse};
pub use scripted::ScriptedSource;
pub use style::{AttrFlags, Attribute, Color, OutputMode, Style, encode_style, encode_style_with};
pub use translator::{Translator, translate_key};
