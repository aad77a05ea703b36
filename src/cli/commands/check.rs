//! Check command implementation.
//!
//! The `pr-cleaner-ai check` command verifies that the tools the PR
//! workflow depends on are installed and usable.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::cli::args::CheckArgs;
use crate::config::{config_path, load_config, validate, ProjectConfig};
use crate::error::{PrCleanerError, Result};
use crate::requirements::{check_all, check_and_report, requirements_from_config, reserved_names};
use crate::shell::{CommandRunner, ShellRunner};
use crate::ui::{NonInteractiveUI, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code for an unreadable or invalid config file.
pub const CONFIG_ERROR_EXIT_CODE: i32 = 2;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: PathBuf,
    args: CheckArgs,
    runner: Rc<dyn CommandRunner>,
}

impl CheckCommand {
    /// Create a new check command that runs probes through the user's shell.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path(project_root, config_override),
            args,
            runner: Rc::new(ShellRunner::new().in_dir(project_root)),
        }
    }

    /// Replace the command runner used by probes.
    pub fn with_runner(mut self, runner: Rc<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn load_config(&self) -> Result<ProjectConfig> {
        let config = load_config(&self.config_path)?;
        validate(&config, &reserved_names())?;
        Ok(config)
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.load_config() {
            Ok(config) => config,
            Err(e @ PrCleanerError::ConfigParseError { .. })
            | Err(e @ PrCleanerError::ConfigValidationError { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(CONFIG_ERROR_EXIT_CODE));
            }
            Err(e) => return Err(e),
        };

        let mut requirements = requirements_from_config(
            &self.project_root,
            &config.requirements,
            &self.args.skip,
            Rc::clone(&self.runner),
        );

        let exit_code = if self.args.json {
            let mut quiet = NonInteractiveUI::new(OutputMode::Silent);
            let report = check_all(&mut requirements, &mut quiet);
            let output = serde_json::to_string_pretty(&report)
                .map_err(|e| PrCleanerError::Other(e.into()))?;
            println!("{}", output);
            report.exit_code()
        } else {
            check_and_report(&mut requirements, ui).exit_code()
        };

        if exit_code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(i32::from(exit_code)))
        }
    }
}
