//! Error types for pr-cleaner-ai operations.
//!
//! This module defines [`PrCleanerError`], the error type used by the
//! configuration, shell and CLI layers, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Probes and the rules sync never return these errors: failures there are
//!   recovered locally into `installed = false` or a degraded sync outcome
//! - Use `PrCleanerError` for failures the CLI must report (bad config, etc.)
//! - Use `anyhow::Error` (via `PrCleanerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pr-cleaner-ai operations.
#[derive(Debug, Error)]
pub enum PrCleanerError {
    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command could not be spawned.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pr-cleaner-ai operations.
pub type Result<T> = std::result::Result<T, PrCleanerError>;
