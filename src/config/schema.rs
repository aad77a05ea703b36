//! Configuration schema for `.pr-cleaner-ai.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root of the project configuration file.
///
/// Every section is optional; a missing file is the same as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Adjustments to the requirement list.
    pub requirements: RequirementsConfig,

    /// Rules sync settings.
    pub sync: SyncConfig,
}

/// Adjustments to the built-in requirement list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequirementsConfig {
    /// Built-in requirements to downgrade to optional (by name).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub optional: Vec<String>,

    /// Built-in requirements to drop entirely (by name).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skip: Vec<String>,

    /// Extra project-specific requirements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomRequirement>,
}

/// A project-specific requirement checked by running a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomRequirement {
    /// Display name, unique within the list.
    pub name: String,

    /// Command that exits zero when the tool is available.
    pub command: String,

    /// Whether absence blocks the workflow.
    #[serde(default = "default_required")]
    pub required: bool,

    /// Why the tool is needed.
    #[serde(default)]
    pub description: String,

    /// Human-readable install instructions.
    #[serde(default)]
    pub install_hint: String,
}

fn default_required() -> bool {
    true
}

/// Rules sync settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Template paths to try before the packaged ones, relative to the
    /// project root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<PathBuf>,
}
