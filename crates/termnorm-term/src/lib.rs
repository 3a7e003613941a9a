//! Terminal shell for termnorm
//!
//! A thin layer over [`termnorm_core`] that owns all terminal I/O: it reads
//! crossterm events as [`termnorm_core::RawEvent`]s, manages terminal modes,
//! and renders encoded styles. Translation and gesture logic live in the core
//! crate, so everything here is plumbing.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
pub mod inspect;
pub mod menu;
pub mod source;
pub mod style;
mod terminal;

pub use config::TerminalConfig;
pub use error::TerminalError;
pub use inspect::run_inspector;
pub use menu::run_menu;
pub use source::{Interrupter, TerminalSource, convert_event};
pub use style::to_content_style;
pub use terminal::TerminalGuard;
