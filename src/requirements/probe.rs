//! Probes that detect whether an external tool is usable.
//!
//! A probe answers one yes/no question and, as a side effect, renders a
//! single status line through the [`UserInterface`]. Probes never fail
//! outward: a command that cannot be spawned or exits non-zero is just a
//! `false`.
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::requirements::probe::Probe;
//! use pr_cleaner_ai::ui::{MockUI, UserInterface};
//!
//! let probe = |ui: &mut dyn UserInterface| {
//!     ui.success("Example: available");
//!     true
//! };
//! let mut ui = MockUI::new();
//! assert!(probe.check(&mut ui));
//! assert!(ui.has_success("Example"));
//! ```

use regex::Regex;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::LazyLock;

use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// A single availability check.
pub trait Probe {
    /// Run the check, render one status line, and report availability.
    fn check(&self, ui: &mut dyn UserInterface) -> bool;
}

impl<F> Probe for F
where
    F: Fn(&mut dyn UserInterface) -> bool,
{
    fn check(&self, ui: &mut dyn UserInterface) -> bool {
        self(ui)
    }
}

/// Regex for dotted version numbers such as `2.43.0` or `v20.11.1`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?\d+\.\d+(\.\d+)?").expect("VERSION_REGEX must compile")
});

/// Extract a dotted version number (e.g. `2.43.0` or `v20.11.1`) from text.
pub fn extract_version(text: &str) -> Option<&str> {
    VERSION_REGEX.find(text).map(|m| m.as_str())
}

/// Pick the line of command output that describes the version.
///
/// Login shells sometimes print banners before the tool's own output, so
/// the first line carrying a version number wins; otherwise the first
/// non-empty line is used.
pub fn version_line(stdout: &str) -> &str {
    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.clone().next().unwrap_or("");
    lines
        .find(|line| extract_version(line).is_some())
        .unwrap_or(first)
}

/// Checks a tool by running its version command.
pub struct VersionProbe {
    label: String,
    command: String,
    runner: Rc<dyn CommandRunner>,
}

impl VersionProbe {
    /// Create a probe that runs `command` and reports under `label`.
    pub fn new(label: &str, command: &str, runner: Rc<dyn CommandRunner>) -> Self {
        Self {
            label: label.to_string(),
            command: command.to_string(),
            runner,
        }
    }

    /// Run the version command, returning the version line on success.
    pub fn detect(&self) -> Option<String> {
        self.runner
            .run_ok(&self.command)
            .map(|output| version_line(&output.stdout).to_string())
    }
}

impl Probe for VersionProbe {
    fn check(&self, ui: &mut dyn UserInterface) -> bool {
        match self.detect() {
            Some(version) => {
                if let Some(number) = extract_version(&version) {
                    tracing::debug!("{} version {}", self.label, number);
                }
                ui.success(&format!("{}: {}", self.label, version));
                true
            }
            None => {
                ui.error(&format!("{}: NOT INSTALLED", self.label));
                false
            }
        }
    }
}

/// What an authenticated CLI probe found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAuthState {
    /// The binary could not be run at all.
    NotInstalled,
    /// The binary runs but the auth status check failed.
    Unauthenticated { version: String },
    /// The binary runs and reports an authenticated session.
    Authenticated { version: String },
}

impl CliAuthState {
    /// Whether the CLI is ready to use.
    pub fn is_ready(&self) -> bool {
        matches!(self, CliAuthState::Authenticated { .. })
    }
}

/// Checks a CLI that must be both installed and logged in.
///
/// The auth command only runs once the version command has succeeded.
pub struct AuthenticatedCliProbe {
    label: String,
    version_command: String,
    auth_command: String,
    login_command: String,
    runner: Rc<dyn CommandRunner>,
}

impl AuthenticatedCliProbe {
    /// Create a probe for an arbitrary authenticated CLI.
    pub fn new(
        label: &str,
        version_command: &str,
        auth_command: &str,
        login_command: &str,
        runner: Rc<dyn CommandRunner>,
    ) -> Self {
        Self {
            label: label.to_string(),
            version_command: version_command.to_string(),
            auth_command: auth_command.to_string(),
            login_command: login_command.to_string(),
            runner,
        }
    }

    /// Probe for the GitHub CLI (`gh`).
    pub fn github(runner: Rc<dyn CommandRunner>) -> Self {
        Self::new(
            "GitHub CLI",
            "gh --version",
            "gh auth status",
            "gh auth login",
            runner,
        )
    }

    /// Determine installation and authentication state.
    pub fn detect(&self) -> CliAuthState {
        let Some(output) = self.runner.run_ok(&self.version_command) else {
            return CliAuthState::NotInstalled;
        };
        let version = version_line(&output.stdout).to_string();

        if self.runner.run_ok(&self.auth_command).is_some() {
            CliAuthState::Authenticated { version }
        } else {
            CliAuthState::Unauthenticated { version }
        }
    }
}

impl Probe for AuthenticatedCliProbe {
    fn check(&self, ui: &mut dyn UserInterface) -> bool {
        let state = self.detect();
        match &state {
            CliAuthState::NotInstalled => {
                ui.error(&format!("{}: NOT INSTALLED", self.label));
            }
            CliAuthState::Unauthenticated { version } => {
                ui.success(&format!("{}: {}", self.label, version));
                ui.warning(&format!(
                    "{}: Installed but NOT AUTHENTICATED",
                    self.label
                ));
                ui.show_hint(&format!("Run: {}", self.login_command));
            }
            CliAuthState::Authenticated { version } => {
                ui.success(&format!("{}: {}", self.label, version));
                ui.success(&format!("{}: Authenticated", self.label));
            }
        }
        state.is_ready()
    }
}

/// Where a script runner was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerLocation {
    /// In the project's `node_modules/.bin`.
    Local(PathBuf),
    /// On the user's PATH.
    Global,
    /// Nowhere.
    Missing,
}

/// Checks for a script runner installed locally or globally.
pub struct ScriptRunnerProbe {
    label: String,
    local_bin: PathBuf,
    global_command: String,
    runner: Rc<dyn CommandRunner>,
}

impl ScriptRunnerProbe {
    /// Create a probe that looks in `local_bin` before trying `global_command`.
    pub fn new(
        label: &str,
        local_bin: PathBuf,
        global_command: &str,
        runner: Rc<dyn CommandRunner>,
    ) -> Self {
        Self {
            label: label.to_string(),
            local_bin,
            global_command: global_command.to_string(),
            runner,
        }
    }

    /// Probe for `tsx` in the given project.
    pub fn tsx(project_root: &Path, runner: Rc<dyn CommandRunner>) -> Self {
        let local_bin = project_root.join("node_modules").join(".bin").join("tsx");
        Self::new("tsx", local_bin, "tsx --version", runner)
    }

    /// Locate the runner, preferring the project-local install.
    pub fn locate(&self) -> RunnerLocation {
        let windows_shim = self.local_bin.with_extension("cmd");
        if self.local_bin.exists() {
            return RunnerLocation::Local(self.local_bin.clone());
        }
        if cfg!(windows) && windows_shim.exists() {
            return RunnerLocation::Local(windows_shim);
        }
        if self.runner.run_ok(&self.global_command).is_some() {
            return RunnerLocation::Global;
        }
        RunnerLocation::Missing
    }
}

impl Probe for ScriptRunnerProbe {
    fn check(&self, ui: &mut dyn UserInterface) -> bool {
        match self.locate() {
            RunnerLocation::Local(path) => {
                tracing::debug!("{} found at {}", self.label, path.display());
                ui.success(&format!("{}: Installed locally (node_modules)", self.label));
                true
            }
            RunnerLocation::Global => {
                ui.success(&format!("{}: Installed globally", self.label));
                true
            }
            RunnerLocation::Missing => {
                ui.error(&format!("{}: NOT INSTALLED", self.label));
                false
            }
        }
    }
}
