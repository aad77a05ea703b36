//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//!
//! // Use ui in code under test...
//! ui.message("Checking requirements");
//! ui.success("Git: git version 2.43.0");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("Checking requirements"));
//! assert!(ui.has_success("Git"));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call per kind, plus a single ordered transcript so tests
/// can assert on the relative order of rendered sections.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    hints: Vec<String>,
    separators: usize,
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Number of separators shown.
    pub fn separators(&self) -> usize {
        self.separators
    }

    /// Every captured line in call order, regardless of kind.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Whether nothing at all was rendered.
    pub fn is_empty(&self) -> bool {
        self.transcript.is_empty()
    }

    /// Position of the first transcript line containing `needle`.
    pub fn position_of(&self, needle: &str) -> Option<usize> {
        self.transcript.iter().position(|line| line.contains(needle))
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if any captured line of any kind contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.position_of(needle).is_some()
    }

    /// Clear all captured interactions.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.successes.clear();
        self.warnings.clear();
        self.errors.clear();
        self.headers.clear();
        self.hints.clear();
        self.separators = 0;
        self.transcript.clear();
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
        self.transcript.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
        self.transcript.push(hint.to_string());
    }

    fn show_separator(&mut self) {
        self.separators += 1;
        self.transcript.push("=".repeat(super::SEPARATOR_WIDTH));
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
