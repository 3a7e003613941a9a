//! Terminal session configuration.

use termnorm_core::OutputMode;

/// How the terminal is set up for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Report mouse presses, motion and wheel.
    pub mouse_capture: bool,
    /// Switch to the alternate screen while the session runs.
    pub alternate_screen: bool,
    /// Colour capability assumed when encoding styles.
    pub output_mode: OutputMode,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { mouse_capture: true, alternate_screen: true, output_mode: OutputMode::TrueColor }
    }
}
