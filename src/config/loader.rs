//! Configuration file discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{PrCleanerError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root when no override is given.
pub const DEFAULT_CONFIG_FILE: &str = ".pr-cleaner-ai.yml";

/// Resolve the config file path.
///
/// An explicit override wins; relative overrides are taken relative to the
/// project root.
pub fn config_path(project_root: &Path, override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => project_root.join(path),
        None => project_root.join(DEFAULT_CONFIG_FILE),
    }
}

/// Load the project config, falling back to defaults when the file is absent.
pub fn load_config(path: &Path) -> Result<ProjectConfig> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(ProjectConfig::default());
        }
        Err(e) => return Err(PrCleanerError::Io(e)),
    };

    tracing::debug!("Loading config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// Blank or comment-only documents yield the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    let has_content = content
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'));
    if !has_content {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| PrCleanerError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
