//! Sync command implementation.
//!
//! The `pr-cleaner-ai sync` command (alias `postinstall`) copies the
//! packaged rules file into the project on install.

use std::path::{Path, PathBuf};

use crate::cli::args::SyncArgs;
use crate::config::{config_path, load_config};
use crate::error::Result;
use crate::sync::{install_dir, render_outcome, run_install_hook};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The sync command implementation.
pub struct SyncCommand {
    project_root: PathBuf,
    config_path: PathBuf,
    args: SyncArgs,
    ci: bool,
}

impl SyncCommand {
    /// Create a new sync command.
    ///
    /// `ci` is the detected automation flag; `--ci` forces it on.
    pub fn new(
        project_root: &Path,
        config_override: Option<&Path>,
        args: SyncArgs,
        ci: bool,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path(project_root, config_override),
            args,
            ci,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &SyncArgs {
        &self.args
    }

    /// Whether the CI gate applies.
    pub fn is_gated(&self) -> bool {
        self.ci || self.args.ci
    }

    /// `--source` flags first, then configured sources.
    fn overrides(&self) -> Vec<PathBuf> {
        let configured = match load_config(&self.config_path) {
            Ok(config) => config.sync.sources,
            Err(e) => {
                tracing::warn!("Ignoring config for sync: {}", e);
                Vec::new()
            }
        };

        self.args.source.iter().cloned().chain(configured).collect()
    }
}

impl Command for SyncCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.is_gated() {
            return Ok(CommandResult::success());
        }

        let install_dir = match install_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        };
        let overrides = self.overrides();

        if let Some(outcome) =
            run_install_hook(false, &self.project_root, install_dir.as_deref(), &overrides)
        {
            if let Some(source) = outcome.source() {
                tracing::debug!("Synced rules from {}", source.display());
            }
            render_outcome(&outcome, ui);
        }

        Ok(CommandResult::success())
    }
}
