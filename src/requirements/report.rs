//! Console rendering of a check [`Report`].

use crate::requirements::checker::Report;
use crate::requirements::registry::Requirement;
use crate::ui::UserInterface;

/// Render the summary that follows the per-probe status lines.
///
/// Required misses come first, optional misses second, then the blocking
/// message when the workflow cannot proceed.
pub fn render_report(report: &Report<'_>, ui: &mut dyn UserInterface) {
    ui.show_separator();

    if report.is_fully_clean() {
        ui.success("All requirements met! You can use the tool.");
        return;
    }

    if !report.missing_required.is_empty() {
        ui.error("Missing required tools:");
        for req in &report.missing_required {
            render_install_block(req, ui);
        }
    }

    if !report.missing_optional.is_empty() {
        ui.warning("Optional tools (useful, but not required):");
        for req in &report.missing_optional {
            render_install_block(req, ui);
        }
    }

    if report.success() {
        ui.success("All required tools are installed. You can use the tool.");
    } else {
        ui.error("You cannot run the tool until you install required dependencies.");
    }
}

/// Every line of the block, the tool name included, is a hint so that
/// quiet mode keeps the name next to its install steps.
fn render_install_block(req: &Requirement, ui: &mut dyn UserInterface) {
    ui.message("");
    ui.show_hint(&req.name);
    if !req.description.is_empty() {
        ui.show_hint(&format!("  {}", req.description));
    }
    if !req.install_instructions.trim().is_empty() {
        ui.show_hint("  Installation:");
        for line in req.install_instructions.lines() {
            ui.show_hint(format!("    {}", line).trim_end());
        }
    }
}
