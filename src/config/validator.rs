//! Configuration validation rules.
//!
//! - Custom requirement names must be non-empty
//! - Custom requirement names must not collide with built-ins or each other
//! - Custom requirement commands must be non-empty

use crate::config::schema::ProjectConfig;
use crate::error::{PrCleanerError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Requirement name if error is requirement-specific
    pub requirement: Option<String>,
}

/// Validate a configuration and return all errors.
///
/// `reserved` holds the names already taken by built-in requirements.
/// Names compare case-insensitively.
pub fn validate_config(config: &ProjectConfig, reserved: &[&str]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let reserved: HashSet<String> = reserved.iter().map(|n| n.to_lowercase()).collect();
    let mut seen = HashSet::new();

    for (index, custom) in config.requirements.custom.iter().enumerate() {
        let name = custom.name.trim();

        if name.is_empty() {
            errors.push(ValidationError {
                rule: "missing-name".to_string(),
                message: format!("Custom requirement #{} has an empty name", index + 1),
                requirement: None,
            });
            continue;
        }

        let key = name.to_lowercase();
        if reserved.contains(&key) {
            errors.push(ValidationError {
                rule: "reserved-name".to_string(),
                message: format!(
                    "Custom requirement '{}' clashes with a built-in requirement",
                    name
                ),
                requirement: Some(name.to_string()),
            });
        } else if !seen.insert(key) {
            errors.push(ValidationError {
                rule: "duplicate-name".to_string(),
                message: format!("Custom requirement '{}' is defined more than once", name),
                requirement: Some(name.to_string()),
            });
        }

        if custom.command.trim().is_empty() {
            errors.push(ValidationError {
                rule: "missing-command".to_string(),
                message: format!("Custom requirement '{}' must have a 'command'", name),
                requirement: Some(name.to_string()),
            });
        }
    }

    errors
}

/// Validate and return a Result.
pub fn validate(config: &ProjectConfig, reserved: &[&str]) -> Result<()> {
    let errors = validate_config(config, reserved);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PrCleanerError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
