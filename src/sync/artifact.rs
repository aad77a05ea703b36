//! Locating the packaged rules template and copying it into the project.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::sync::outcome::SyncOutcome;

/// File name of the rules artifact, both packaged and installed.
pub const RULES_FILE_NAME: &str = "pr-cleaner-ai.mdc";

/// Package name used to find the template under `node_modules`.
pub const PACKAGE_NAME: &str = "pr-cleaner-ai";

/// Where the rules file lives inside a project.
pub fn destination_path(project_root: &Path) -> PathBuf {
    project_root
        .join(".cursor")
        .join("rules")
        .join(RULES_FILE_NAME)
}

/// Candidate template locations in priority order.
///
/// Overrides come first, relative ones resolved against the project root,
/// then the package under `node_modules`, then paths relative to the
/// directory holding the running executable.
pub fn candidate_sources(
    project_root: &Path,
    install_dir: Option<&Path>,
    overrides: &[PathBuf],
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = overrides
        .iter()
        .map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                project_root.join(path)
            }
        })
        .collect();

    candidates.push(
        project_root
            .join("node_modules")
            .join(PACKAGE_NAME)
            .join("config")
            .join(RULES_FILE_NAME),
    );

    if let Some(dir) = install_dir {
        candidates.push(dir.join("..").join("config").join(RULES_FILE_NAME));
        candidates.push(dir.join("..").join("..").join("config").join(RULES_FILE_NAME));
    }

    candidates
}

/// Directory holding the running executable.
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")?;
    Ok(dir)
}

/// Copies the first available template over the project's rules file.
#[derive(Debug, Clone)]
pub struct ArtifactSync {
    destination: PathBuf,
    candidates: Vec<PathBuf>,
}

impl ArtifactSync {
    pub fn new(destination: PathBuf, candidates: Vec<PathBuf>) -> Self {
        Self {
            destination,
            candidates,
        }
    }

    /// Sync for a project using the standard candidate list.
    pub fn for_project(
        project_root: &Path,
        install_dir: Option<&Path>,
        overrides: &[PathBuf],
    ) -> Self {
        Self::new(
            destination_path(project_root),
            candidate_sources(project_root, install_dir, overrides),
        )
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists; later candidates are never consulted.
    pub fn resolve_source(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.exists())
    }

    /// Bring the destination in line with the template.
    ///
    /// Never deletes the destination. Copy failures are logged and reported
    /// as the matching not-found outcome.
    pub fn sync(&self) -> SyncOutcome {
        let has_destination = self.destination.exists();

        let Some(source) = self.resolve_source() else {
            tracing::debug!("No rules template found among {} candidates", self.candidates.len());
            return SyncOutcome::not_found(has_destination);
        };

        tracing::debug!("Using rules template {}", source.display());
        match self.copy_from(source) {
            Ok(()) if has_destination => SyncOutcome::Updated {
                source: source.to_path_buf(),
            },
            Ok(()) => SyncOutcome::Created {
                source: source.to_path_buf(),
            },
            Err(e) => {
                tracing::warn!(
                    "Could not copy {} to {}: {}",
                    source.display(),
                    self.destination.display(),
                    e
                );
                SyncOutcome::not_found(has_destination)
            }
        }
    }

    fn copy_from(&self, source: &Path) -> Result<()> {
        if self.is_destination(source)? {
            tracing::debug!("Template is the rules file itself, leaving it as is");
            return Ok(());
        }
        if let Some(parent) = self.destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &self.destination)?;
        Ok(())
    }

    /// Whether `source` resolves to the destination file.
    ///
    /// `fs::copy` truncates the destination before reading, so copying a file
    /// onto itself would empty it.
    fn is_destination(&self, source: &Path) -> Result<bool> {
        if !self.destination.exists() {
            return Ok(false);
        }
        Ok(fs::canonicalize(source)? == fs::canonicalize(&self.destination)?)
    }
}
