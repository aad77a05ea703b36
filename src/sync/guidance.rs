//! Post-install guidance for each sync outcome.

use crate::sync::outcome::SyncOutcome;
use crate::ui::UserInterface;

const RULES_DISPLAY_PATH: &str = ".cursor/rules/pr-cleaner-ai.mdc";

/// Render the install summary for `outcome`.
pub fn render_outcome(outcome: &SyncOutcome, ui: &mut dyn UserInterface) {
    ui.show_header("pr-cleaner-ai installed successfully!");

    match outcome {
        SyncOutcome::Updated { .. } => {
            ui.success(&format!(
                "Auto-updated {} to match installed version",
                RULES_DISPLAY_PATH
            ));
            ui.show_hint("(No action needed - rules are up-to-date)");
        }
        SyncOutcome::Created { .. } => {
            ui.success(&format!("Created {}", RULES_DISPLAY_PATH));
            ui.show_hint("(Rules file auto-created from the installed package)");
        }
        SyncOutcome::SourceNotFoundWithExisting => {
            ui.message("Cursor rules file detected, but no packaged template was found.");
            ui.show_hint("Reinstall pr-cleaner-ai, then run: pr-cleaner-ai sync");
        }
        SyncOutcome::SourceNotFoundNoDestination => {
            ui.message("Next step: set up the rules file");
            ui.show_hint("Run: pr-cleaner-ai sync --source <path-to-pr-cleaner-ai.mdc>");
            ui.message("");
            ui.message("This will:");
            ui.show_hint(&format!("- Copy {} into this project", RULES_DISPLAY_PATH));
            ui.show_hint("- Keep it in sync with the package on every install");
            ui.message("");
            ui.message(&format!(
                "Note: {} is regenerated on install, so it does not need to be committed.",
                RULES_DISPLAY_PATH
            ));
        }
    }

    ui.message("");
    ui.message("Next, verify your environment:");
    ui.show_hint("pr-cleaner-ai check");
    ui.message("");
    ui.message("Requirement: GitHub CLI must be installed and authenticated");
    ui.show_hint("Install: brew install gh (macOS) or https://cli.github.com/");
    ui.show_hint("Authenticate: gh auth login");
}
