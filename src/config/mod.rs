//! Project configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use pr_cleaner_ai::config::{config_path, load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".pr-cleaner-ai.yml"),
//!     "requirements:\n  optional: [tsx]\n",
//! )
//! .unwrap();
//!
//! let config = load_config(&config_path(temp.path(), None)).unwrap();
//! validate(&config, &["tsx"]).unwrap();
//! assert_eq!(config.requirements.optional, vec!["tsx"]);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{config_path, load_config, parse_config, DEFAULT_CONFIG_FILE};
pub use schema::{CustomRequirement, ProjectConfig, RequirementsConfig, SyncConfig};
pub use validator::{validate, validate_config, ValidationError};
