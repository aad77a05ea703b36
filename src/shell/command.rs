//! Shell command execution for requirement probes.
//!
//! Probes talk to the outside world through the [`CommandRunner`] trait so
//! that tests can script `gh`, `git` and friends without spawning anything.

use crate::error::{PrCleanerError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::platform::{shell_executable, ShellType};

/// Result of executing a shell command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Something that can run a command line and capture its output.
pub trait CommandRunner {
    /// Run `command` through the shell.
    ///
    /// `Err` means the command could not be started at all; a command that
    /// ran and exited non-zero is `Ok` with `success == false`.
    fn run(&self, command: &str) -> Result<CommandOutput>;

    /// Run a command and return its output only if it exited zero.
    fn run_ok(&self, command: &str) -> Option<CommandOutput> {
        self.run(command).ok().filter(|output| output.success)
    }
}

/// Runs commands through the user's shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
    cwd: Option<PathBuf>,
}

impl ShellRunner {
    /// Create a runner using the user's shell.
    pub fn new() -> Self {
        Self {
            shell: shell_executable(),
            cwd: None,
        }
    }

    /// Run commands from the given working directory.
    pub fn in_dir(mut self, cwd: &Path) -> Self {
        self.cwd = Some(cwd.to_path_buf());
        self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput> {
        let shell_type = ShellType::from_executable(&self.shell.to_string_lossy());

        let mut cmd = Command::new(&self.shell);
        cmd.arg(shell_type.command_flag());
        cmd.arg(command);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        tracing::debug!("Running probe command: {}", command);

        let output = cmd.output().map_err(|_| PrCleanerError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

        let result = CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        };

        tracing::debug!(
            "Probe command '{}' exited with {:?}",
            command,
            result.exit_code
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn shell_runner_captures_stdout() {
        let runner = ShellRunner::new();
        let output = runner.run("echo hello").unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, Some(0));
        assert!(output.stdout.contains("hello"));
    }

    #[cfg(unix)]
    #[test]
    fn shell_runner_reports_failure_exit() {
        let runner = ShellRunner::new();
        let output = runner.run("exit 3").unwrap();
        assert!(!output.success);
        assert_eq!(output.exit_code, Some(3));
    }

    #[cfg(unix)]
    #[test]
    fn run_ok_filters_failures() {
        let runner = ShellRunner::new();
        assert!(runner.run_ok("exit 0").is_some());
        assert!(runner.run_ok("exit 1").is_none());
        assert!(runner
            .run_ok("definitely-not-a-real-binary-xyz --version")
            .is_none());
    }

    #[cfg(unix)]
    #[test]
    fn shell_runner_uses_working_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();
        let runner = ShellRunner::new().in_dir(temp.path());
        assert!(runner.run_ok("test -f marker.txt").is_some());
    }
}
