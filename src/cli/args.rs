//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pr-cleaner-ai - Requirement checks and rules sync for the PR cleaning workflow.
#[derive(Debug, Parser)]
#[command(name = "pr-cleaner-ai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .pr-cleaner-ai.yml)
    #[arg(short, long, global = true, env = "PR_CLEANER_AI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that required tools are installed (default if no command specified)
    Check(CheckArgs),

    /// Copy the packaged rules file into the project
    #[command(alias = "postinstall")]
    Sync(SyncArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip requirements by name (comma-separated or repeated)
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub skip: Vec<String>,
}

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SyncArgs {
    /// Template to try before the packaged ones (repeatable)
    #[arg(long, value_name = "PATH")]
    pub source: Vec<PathBuf>,

    /// Behave as if running under CI (skips the sync)
    #[arg(long)]
    pub ci: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["pr-cleaner-ai"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_check_flags() {
        let cli = Cli::parse_from(["pr-cleaner-ai", "check", "--json", "--skip", "tsx,gh"]);
        match cli.command {
            Some(Commands::Check(args)) => {
                assert!(args.json);
                assert_eq!(args.skip, vec!["tsx", "gh"]);
            }
            other => panic!("expected check, got {:?}", other),
        }
    }

    #[test]
    fn postinstall_is_sync_alias() {
        let cli = Cli::parse_from(["pr-cleaner-ai", "postinstall", "--ci"]);
        assert!(matches!(cli.command, Some(Commands::Sync(SyncArgs { ci: true, .. }))));
    }

    #[test]
    fn sync_sources_keep_order() {
        let cli = Cli::parse_from([
            "pr-cleaner-ai",
            "sync",
            "--source",
            "a.mdc",
            "--source",
            "b.mdc",
        ]);
        match cli.command {
            Some(Commands::Sync(args)) => {
                assert_eq!(args.source, vec![PathBuf::from("a.mdc"), PathBuf::from("b.mdc")]);
            }
            other => panic!("expected sync, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["pr-cleaner-ai", "check", "-p", "/tmp/project", "--debug"]);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
        assert!(cli.debug);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
