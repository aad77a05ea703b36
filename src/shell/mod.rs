//! Shell command execution and environment detection.

pub mod command;
pub mod platform;

pub use command::{CommandOutput, CommandRunner, ShellRunner};
pub use platform::{is_ci, is_ci_with, shell_executable, ShellType, CI_ENV_VARS};
