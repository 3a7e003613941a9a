//! Terminal mode management.
//!
//! [`TerminalGuard`] puts the terminal into the state a normalizing session
//! needs and restores it on drop, including when the session unwinds.

use std::io::{self, Write, stdout};

use crossterm::{
    execute,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use crate::{TerminalConfig, TerminalError};

/// Raw mode plus the optional alternate screen and mouse capture, for as long
/// as the guard lives.
#[derive(Debug)]
pub struct TerminalGuard {
    config: TerminalConfig,
}

impl TerminalGuard {
    /// Enter raw mode and apply `config`.
    ///
    /// If a later step fails, the steps already taken are undone before the
    /// error is returned.
    pub fn enter(config: TerminalConfig) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        // From here on, Drop restores whatever has been switched on.
        let mut guard = Self {
            config: TerminalConfig { mouse_capture: false, alternate_screen: false, ..config },
        };

        if config.alternate_screen {
            execute!(stdout(), EnterAlternateScreen)?;
            guard.config.alternate_screen = true;
        }
        if config.mouse_capture {
            execute!(stdout(), EnableMouseCapture)?;
            guard.config.mouse_capture = true;
        }

        tracing::debug!(?config, "terminal session started");
        Ok(guard)
    }

    /// Active configuration.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    fn restore(&self) -> io::Result<()> {
        let mut out = stdout();
        if self.config.mouse_capture {
            execute!(out, DisableMouseCapture)?;
        }
        if self.config.alternate_screen {
            execute!(out, LeaveAlternateScreen)?;
        }
        disable_raw_mode()?;
        out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}
