//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations:
//! - `pr-cleaner-ai check` (also the default) verifies requirements
//! - `pr-cleaner-ai sync` (alias `postinstall`) syncs the rules file

pub mod check;
pub mod dispatcher;
pub mod sync;

pub use check::{CheckCommand, CONFIG_ERROR_EXIT_CODE};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use sync::SyncCommand;
