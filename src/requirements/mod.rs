//! Requirement detection.
//!
//! Checks whether the external tools the PR workflow depends on are
//! installed and usable, and explains how to install the missing ones.
//!
//! # Modules
//!
//! - [`probe`] - Availability checks for individual tools
//! - [`registry`] - Requirement definitions and the built-in list
//! - [`checker`] - Runs probes and classifies the results
//! - [`report`] - Console rendering of the classification
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::requirements::{check_all, Requirement};
//! use pr_cleaner_ai::ui::{MockUI, UserInterface};
//!
//! let mut requirements = vec![
//!     Requirement::new("present", |_: &mut dyn UserInterface| true),
//!     Requirement::new("absent", |_: &mut dyn UserInterface| false).required(false),
//! ];
//! let mut ui = MockUI::new();
//! let report = check_all(&mut requirements, &mut ui);
//!
//! assert!(report.success());
//! assert!(!report.is_fully_clean());
//! ```

pub mod checker;
pub mod probe;
pub mod registry;
pub mod report;

pub use checker::{check_all, check_and_report, check_requirements, Report};
pub use probe::{
    AuthenticatedCliProbe, CliAuthState, Probe, RunnerLocation, ScriptRunnerProbe, VersionProbe,
};
pub use registry::{
    builtin_requirements, custom_requirement, requirements_from_config, reserved_names,
    Requirement,
};
pub use report::render_report;
