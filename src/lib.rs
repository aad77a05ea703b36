//! pr-cleaner-ai - Environment bootstrapper for the PR cleaning workflow.
//!
//! Two independent pieces run once per invocation:
//! - a requirement checker that probes the external tools the workflow
//!   needs (Node.js, Git, an authenticated GitHub CLI, tsx) and explains
//!   how to install what is missing
//! - an install hook that keeps `.cursor/rules/pr-cleaner-ai.mdc` in sync
//!   with the packaged template
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional project configuration
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Probes, the requirement list and the check report
//! - [`shell`] - Shell command execution and CI detection
//! - [`sync`] - Rules file synchronization
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::requirements::{check_all, Requirement};
//! use pr_cleaner_ai::ui::{MockUI, UserInterface};
//!
//! let mut requirements = vec![Requirement::new("always", |ui: &mut dyn UserInterface| {
//!     ui.success("always: available");
//!     true
//! })];
//! let mut ui = MockUI::new();
//!
//! let report = check_all(&mut requirements, &mut ui);
//! assert_eq!(report.exit_code(), 0);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod sync;
pub mod ui;

pub use error::{PrCleanerError, Result};
