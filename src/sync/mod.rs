//! Rules file synchronization.
//!
//! On every install the packaged `.cursor/rules/pr-cleaner-ai.mdc` template
//! is copied into the project, so the rules always match the installed
//! version. Automation environments are left alone.
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::sync::{run_install_hook, SyncOutcome};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let template = temp.path().join("template.mdc");
//! fs::write(&template, "rules").unwrap();
//!
//! let outcome = run_install_hook(false, temp.path(), None, &[template.clone()]);
//! assert_eq!(outcome, Some(SyncOutcome::Created { source: template }));
//!
//! // In CI nothing happens at all.
//! assert_eq!(run_install_hook(true, temp.path(), None, &[]), None);
//! ```

pub mod artifact;
pub mod guidance;
pub mod outcome;

pub use artifact::{
    candidate_sources, destination_path, install_dir, ArtifactSync, PACKAGE_NAME,
    RULES_FILE_NAME,
};
pub use guidance::render_outcome;
pub use outcome::SyncOutcome;

use std::path::{Path, PathBuf};

/// The install hook: sync unless running under CI.
///
/// Returns `None` without touching the filesystem when `ci` is set.
pub fn run_install_hook(
    ci: bool,
    project_root: &Path,
    install_dir: Option<&Path>,
    overrides: &[PathBuf],
) -> Option<SyncOutcome> {
    if ci {
        return None;
    }
    Some(ArtifactSync::for_project(project_root, install_dir, overrides).sync())
}
