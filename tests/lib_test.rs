//! Library integration tests.

use pr_cleaner_ai::PrCleanerError;

#[test]
fn error_types_are_public() {
    let err = PrCleanerError::ConfigValidationError {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pr_cleaner_ai::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pr_cleaner_ai::cli::{Cli, Commands};

    let cli = Cli::parse_from(["pr-cleaner-ai", "check", "--json"]);

    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn ci_detection_uses_injected_lookup() {
    use pr_cleaner_ai::shell::is_ci_with;
    use std::env::VarError;

    assert!(is_ci_with(|key| {
        if key == "GITLAB_CI" {
            Ok("true".to_string())
        } else {
            Err(VarError::NotPresent)
        }
    }));
    assert!(!is_ci_with(|_| Err(VarError::NotPresent)));
}

#[test]
fn ui_types_are_public() {
    use pr_cleaner_ai::ui::{MockUI, OutputMode, UserInterface};

    let mut ui = MockUI::with_mode(OutputMode::Quiet);
    ui.warning("careful");
    assert!(ui.has_warning("careful"));
}
