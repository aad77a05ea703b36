//! pr-cleaner-ai CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pr_cleaner_ai::cli::{Cli, CommandDispatcher, Commands};
use pr_cleaner_ai::shell::is_ci;
use pr_cleaner_ai::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pr_cleaner_ai=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pr_cleaner_ai=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pr-cleaner-ai starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let ci = is_ci();
    let is_interactive = match &cli.command {
        Some(Commands::Check(args)) => !args.json && !ci,
        _ => !ci,
    };

    let mut ui = create_ui(is_interactive, output_mode);

    let dispatcher = CommandDispatcher::new(project_root, cli.config.clone(), ci);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
