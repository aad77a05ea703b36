//! Platform-specific shell and environment detection.

use std::path::PathBuf;

/// Environment variables whose presence marks a continuous-integration run.
pub const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Known shell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Cmd,
    Unknown,
}

impl ShellType {
    /// Parse shell type from executable name.
    pub fn from_executable(exe: &str) -> Self {
        let name = std::path::Path::new(exe)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "bash" => ShellType::Bash,
            "zsh" => ShellType::Zsh,
            "fish" => ShellType::Fish,
            "powershell" | "pwsh" => ShellType::PowerShell,
            "cmd" => ShellType::Cmd,
            _ => ShellType::Unknown,
        }
    }

    /// Flag that makes this shell run a single command string.
    ///
    /// POSIX shells get `-lc` so login profiles (nvm, volta, Homebrew) put
    /// `node`, `gh` and `tsx` on PATH without requiring a TTY.
    pub fn command_flag(&self) -> &'static str {
        match self {
            ShellType::Cmd => "/C",
            ShellType::PowerShell => "-Command",
            ShellType::Bash | ShellType::Zsh | ShellType::Fish => "-lc",
            ShellType::Unknown => "-c",
        }
    }
}

/// Locate the user's shell executable.
pub fn shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
    }
}

/// Check if running in a CI environment.
///
/// Read once in `main()` and passed down as a plain flag; the rules sync
/// turns into a no-op when it is set.
pub fn is_ci() -> bool {
    is_ci_with(|key: &str| std::env::var(key))
}

/// Check for CI markers with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
/// A variable only has to be set; an empty value still counts.
pub fn is_ci_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CI_ENV_VARS.iter().any(|var| env_fn(var).is_ok())
}
