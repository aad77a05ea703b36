//! Result classification for one sync invocation.

use std::path::{Path, PathBuf};

/// What a sync did. Exactly one applies per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The destination existed and was overwritten from `source`.
    Updated { source: PathBuf },
    /// The destination did not exist and was created from `source`.
    Created { source: PathBuf },
    /// No source could be used; an existing destination was left untouched.
    SourceNotFoundWithExisting,
    /// No source could be used and there is no destination yet.
    SourceNotFoundNoDestination,
}

impl SyncOutcome {
    /// Whether the destination was written.
    pub fn wrote(&self) -> bool {
        matches!(self, SyncOutcome::Updated { .. } | SyncOutcome::Created { .. })
    }

    /// The template the destination was copied from, if any.
    pub fn source(&self) -> Option<&Path> {
        match self {
            SyncOutcome::Updated { source } | SyncOutcome::Created { source } => Some(source),
            _ => None,
        }
    }

    /// The not-found outcome for a destination that does or does not exist.
    pub fn not_found(has_destination: bool) -> Self {
        if has_destination {
            SyncOutcome::SourceNotFoundWithExisting
        } else {
            SyncOutcome::SourceNotFoundNoDestination
        }
    }
}
