//! Plain UI for CI, pipes and headless environments.

use super::{OutputMode, UserInterface, SEPARATOR_WIDTH};

/// UI implementation for non-interactive mode.
///
/// Writes plain text without ANSI styling; errors and warnings go to stderr
/// so that `check --json` output on stdout stays machine-readable.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            println!("   {}", hint);
        }
    }

    fn show_separator(&mut self) {
        if self.mode.shows_status() {
            println!("\n{}\n", "=".repeat(SEPARATOR_WIDTH));
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
