//! Requirement definitions and the built-in requirement list.
//!
//! The list holds the built-in tools the PR workflow depends on plus any
//! custom project-specific requirements from config.

use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::rc::Rc;

use crate::config::{CustomRequirement, RequirementsConfig};
use crate::requirements::probe::{AuthenticatedCliProbe, Probe, ScriptRunnerProbe, VersionProbe};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

pub const NODE: &str = "Node.js";
pub const GIT: &str = "Git";
pub const GITHUB_CLI: &str = "GitHub CLI (gh)";
pub const TSX: &str = "tsx";

const NODE_INSTALL: &str = "Install Node.js: https://nodejs.org/";

const GIT_INSTALL: &str = "Install Git: https://git-scm.com/downloads";

const GITHUB_CLI_INSTALL: &str = "\
Install GitHub CLI:

macOS:
  brew install gh

Windows:
  winget install --id GitHub.cli
  # or download from: https://cli.github.com/

Linux:
  # See: https://github.com/cli/cli/blob/trunk/docs/install_linux.md

After installation, authenticate:
  gh auth login";

const TSX_INSTALL: &str = "\
Locally (recommended):
  yarn add -D tsx
  # or
  npm install -D tsx

Globally:
  npm install -g tsx
  # or
  yarn global add tsx";

/// Every name a built-in requirement answers to, for collision checks.
pub fn reserved_names() -> Vec<&'static str> {
    vec![NODE, "node", GIT, "git", GITHUB_CLI, "gh", "GitHub CLI", TSX]
}

/// A single external dependency and how to check for it.
#[derive(Serialize)]
pub struct Requirement {
    /// Display name, unique within the list.
    pub name: String,
    /// Whether absence blocks overall success.
    pub required: bool,
    /// Why the tool is needed.
    pub description: String,
    /// Human-readable install instructions.
    pub install_instructions: String,
    /// Set once the probe has run; `None` means not checked.
    pub installed: Option<bool>,
    #[serde(skip)]
    aliases: Vec<String>,
    #[serde(skip)]
    probe: Box<dyn Probe>,
}

impl Requirement {
    /// Create a required requirement backed by `probe`.
    pub fn new(name: impl Into<String>, probe: impl Probe + 'static) -> Self {
        Self {
            name: name.into(),
            required: true,
            description: String::new(),
            install_instructions: String::new(),
            installed: None,
            aliases: Vec::new(),
            probe: Box::new(probe),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn install_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.install_instructions = instructions.into();
        self
    }

    /// Add a short name accepted by `--skip` and config overrides.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Whether `query` names this requirement (case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.name.eq_ignore_ascii_case(query)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(query))
    }

    /// Run the probe and record the result.
    pub fn check(&mut self, ui: &mut dyn UserInterface) -> bool {
        let installed = self.probe.check(ui);
        self.installed = Some(installed);
        installed
    }

    /// Whether the probe has run and found the tool.
    pub fn is_installed(&self) -> bool {
        self.installed == Some(true)
    }

    /// Whether the probe has run and did not find the tool.
    pub fn is_missing(&self) -> bool {
        self.installed == Some(false)
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("installed", &self.installed)
            .finish_non_exhaustive()
    }
}

/// The built-in requirements, in display order.
pub fn builtin_requirements(
    project_root: &Path,
    runner: Rc<dyn CommandRunner>,
) -> Vec<Requirement> {
    let node = VersionProbe::new("Node.js", "node --version", Rc::clone(&runner));
    let git = VersionProbe::new("Git", "git --version", Rc::clone(&runner));

    vec![
        Requirement::new(NODE, node)
            .alias("node")
            .description("Required to run TypeScript scripts")
            .install_instructions(NODE_INSTALL),
        Requirement::new(GIT, git)
            .alias("git")
            .description("Required to determine repository and branch")
            .install_instructions(GIT_INSTALL),
        Requirement::new(GITHUB_CLI, AuthenticatedCliProbe::github(Rc::clone(&runner)))
            .alias("gh")
            .alias("GitHub CLI")
            .description("Required to fetch PR comments from GitHub")
            .install_instructions(GITHUB_CLI_INSTALL),
        Requirement::new(TSX, ScriptRunnerProbe::tsx(project_root, runner))
            .description("Used to run TypeScript files directly")
            .install_instructions(TSX_INSTALL),
    ]
}

/// Build a requirement from a custom config entry.
pub fn custom_requirement(
    custom: &CustomRequirement,
    runner: Rc<dyn CommandRunner>,
) -> Requirement {
    let name = custom.name.trim();
    Requirement::new(name, VersionProbe::new(name, &custom.command, runner))
        .required(custom.required)
        .description(custom.description.clone())
        .install_instructions(custom.install_hint.clone())
}

/// Assemble the requirement list for a project.
///
/// Built-ins named in `config.skip` or `extra_skip` are dropped, built-ins
/// named in `config.optional` are downgraded, and custom requirements are
/// appended in config order. `extra_skip` also applies to custom entries.
pub fn requirements_from_config(
    project_root: &Path,
    config: &RequirementsConfig,
    extra_skip: &[String],
    runner: Rc<dyn CommandRunner>,
) -> Vec<Requirement> {
    let skip: Vec<&str> = config
        .skip
        .iter()
        .chain(extra_skip)
        .map(String::as_str)
        .collect();

    let mut requirements = builtin_requirements(project_root, Rc::clone(&runner));
    requirements.extend(
        config
            .custom
            .iter()
            .map(|custom| custom_requirement(custom, Rc::clone(&runner))),
    );

    for name in skip.iter().copied().chain(config.optional.iter().map(String::as_str)) {
        if !requirements.iter().any(|r| r.matches(name)) {
            tracing::warn!("Unknown requirement '{}' in skip/optional list", name);
        }
    }

    requirements.retain(|req| {
        let keep = !skip.iter().any(|name| req.matches(name));
        if !keep {
            tracing::debug!("Skipping requirement {}", req.name);
        }
        keep
    });

    for req in &mut requirements {
        if config.optional.iter().any(|name| req.matches(name)) {
            req.required = false;
        }
    }

    requirements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::probe::tests::FakeRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn names(requirements: &[Requirement]) -> Vec<&str> {
        requirements.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn builtins_are_all_required_in_order() {
        let temp = TempDir::new().unwrap();
        let reqs = builtin_requirements(temp.path(), Rc::new(FakeRunner::new()));

        assert_eq!(names(&reqs), vec![NODE, GIT, GITHUB_CLI, TSX]);
        assert!(reqs.iter().all(|r| r.required));
        assert!(reqs.iter().all(|r| r.installed.is_none()));
        assert!(reqs[2].install_instructions.contains("gh auth login"));
    }

    #[test]
    fn matches_name_and_aliases() {
        let temp = TempDir::new().unwrap();
        let reqs = builtin_requirements(temp.path(), Rc::new(FakeRunner::new()));

        assert!(reqs[0].matches("node"));
        assert!(reqs[0].matches("node.js"));
        assert!(reqs[2].matches("gh"));
        assert!(reqs[2].matches("github cli"));
        assert!(!reqs[3].matches("node"));
    }

    #[test]
    fn check_records_installed() {
        let mut req = Requirement::new("probe", |_: &mut dyn UserInterface| true);
        let mut ui = MockUI::new();

        assert!(!req.is_installed());
        assert!(req.check(&mut ui));
        assert_eq!(req.installed, Some(true));
        assert!(!req.is_missing());
    }

    #[test]
    fn config_skips_and_downgrades() {
        let temp = TempDir::new().unwrap();
        let config = RequirementsConfig {
            optional: vec!["tsx".into()],
            skip: vec!["node".into()],
            custom: vec![],
        };

        let reqs = requirements_from_config(temp.path(), &config, &[], Rc::new(FakeRunner::new()));

        assert_eq!(names(&reqs), vec![GIT, GITHUB_CLI, TSX]);
        assert!(!reqs[2].required);
    }

    #[test]
    fn custom_requirements_are_appended() {
        let temp = TempDir::new().unwrap();
        let config = RequirementsConfig {
            custom: vec![CustomRequirement {
                name: "jq".into(),
                command: "jq --version".into(),
                required: false,
                description: "Used by helper scripts".into(),
                install_hint: "brew install jq".into(),
            }],
            ..Default::default()
        };

        let reqs = requirements_from_config(
            temp.path(),
            &config,
            &["git".to_string()],
            Rc::new(FakeRunner::new()),
        );

        assert_eq!(names(&reqs), vec![NODE, GITHUB_CLI, TSX, "jq"]);
        let jq = &reqs[3];
        assert!(!jq.required);
        assert_eq!(jq.install_instructions, "brew install jq");
    }

    #[test]
    fn custom_requirement_probes_its_command() {
        let runner = Rc::new(FakeRunner::new().ok("jq --version", "jq-1.7.1\n"));
        let custom = CustomRequirement {
            name: "jq".into(),
            command: "jq --version".into(),
            required: true,
            description: String::new(),
            install_hint: String::new(),
        };
        let mut req = custom_requirement(&custom, runner);
        let mut ui = MockUI::new();

        assert!(req.check(&mut ui));
        assert!(ui.has_success("jq: jq-1.7.1"));
    }

    #[test]
    fn serializes_without_probe() {
        let mut req = Requirement::new("probe", |_: &mut dyn UserInterface| false)
            .description("desc");
        req.installed = Some(false);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "probe");
        assert_eq!(json["installed"], false);
        assert!(json.get("probe").is_none());
        assert!(json.get("aliases").is_none());
    }
}
