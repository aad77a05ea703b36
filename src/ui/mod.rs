//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait, the single seam every report renders through
//! - [`TerminalUI`] for styled terminal output
//! - [`NonInteractiveUI`] for CI/headless environments and pipes
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Checking requirements");
//! ui.success("All requirements met!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PrCleanerTheme};

/// Width of the separator line between probe results and guidance.
pub const SEPARATOR_WIDTH: usize = 60;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint (e.g. a command to run next).
    fn show_hint(&mut self, hint: &str);

    /// Show a visual separator line.
    fn show_separator(&mut self);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}
