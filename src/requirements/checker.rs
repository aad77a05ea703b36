//! Requirement checking and result classification.
//!
//! [`check_all`] runs every probe in list order, records the outcome on each
//! [`Requirement`], and classifies the misses into a [`Report`].

use serde::{Serialize, Serializer};
use std::path::Path;
use std::rc::Rc;

use crate::requirements::registry::{builtin_requirements, Requirement};
use crate::requirements::report::render_report;
use crate::shell::ShellRunner;
use crate::ui::UserInterface;

/// Aggregate result of one check run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    /// True iff every required requirement is installed.
    pub all_required_satisfied: bool,
    /// Required and not installed, in list order.
    #[serde(serialize_with = "serialize_names")]
    pub missing_required: Vec<&'a Requirement>,
    /// Optional and not installed, in list order.
    #[serde(serialize_with = "serialize_names")]
    pub missing_optional: Vec<&'a Requirement>,
    /// Every requirement with its recorded status.
    pub requirements: &'a [Requirement],
}

fn serialize_names<S: Serializer>(
    requirements: &[&Requirement],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(requirements.iter().map(|r| r.name.as_str()))
}

impl<'a> Report<'a> {
    /// Classify requirements whose probes have already run.
    ///
    /// Requirements that were never checked count as missing.
    pub fn from_requirements(requirements: &'a [Requirement]) -> Self {
        let (missing_required, missing_optional): (Vec<_>, Vec<_>) = requirements
            .iter()
            .filter(|r| !r.is_installed())
            .partition(|r| r.required);

        Self {
            all_required_satisfied: missing_required.is_empty(),
            missing_required,
            missing_optional,
            requirements,
        }
    }

    /// Whether the workflow may proceed.
    pub fn success(&self) -> bool {
        self.all_required_satisfied
    }

    /// No missing requirement of any kind.
    pub fn is_fully_clean(&self) -> bool {
        self.missing_required.is_empty() && self.missing_optional.is_empty()
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> u8 {
        if self.success() {
            0
        } else {
            1
        }
    }
}

/// Run every probe in order and classify the results.
pub fn check_all<'a>(
    requirements: &'a mut [Requirement],
    ui: &mut dyn UserInterface,
) -> Report<'a> {
    for req in requirements.iter_mut() {
        let installed = req.check(ui);
        tracing::debug!("{} installed: {}", req.name, installed);
    }

    let requirements: &'a [Requirement] = requirements;
    Report::from_requirements(requirements)
}

/// Check requirements and render the full console report.
pub fn check_and_report<'a>(
    requirements: &'a mut [Requirement],
    ui: &mut dyn UserInterface,
) -> Report<'a> {
    ui.show_header("Checking requirements for pr-cleaner-ai...");
    let report = check_all(requirements, ui);
    render_report(&report, ui);
    report
}

/// Check the built-in requirements for a project.
///
/// Returns `true` when every required tool is available.
pub fn check_requirements(project_root: &Path, ui: &mut dyn UserInterface) -> bool {
    let runner = Rc::new(ShellRunner::new().in_dir(project_root));
    let mut requirements = builtin_requirements(project_root, runner);
    check_and_report(&mut requirements, ui).success()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn fixed(name: &str, required: bool, installed: bool) -> Requirement {
        let label = name.to_string();
        Requirement::new(name, move |ui: &mut dyn UserInterface| {
            if installed {
                ui.success(&format!("{}: found", label));
            } else {
                ui.error(&format!("{}: NOT INSTALLED", label));
            }
            installed
        })
        .required(required)
        .description(format!("{} description", name))
        .install_instructions(format!("install {}", name))
    }

    #[test]
    fn all_installed_is_success_and_clean() {
        let mut reqs = vec![fixed("a", true, true), fixed("b", false, true)];
        let mut ui = MockUI::new();

        let report = check_all(&mut reqs, &mut ui);

        assert!(report.success());
        assert!(report.is_fully_clean());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn check_all_records_installed_in_order() {
        let mut reqs = vec![fixed("a", true, true), fixed("b", true, false)];
        let mut ui = MockUI::new();

        check_all(&mut reqs, &mut ui);

        assert_eq!(reqs[0].installed, Some(true));
        assert_eq!(reqs[1].installed, Some(false));
        assert!(ui.position_of("a: found") < ui.position_of("b: NOT INSTALLED"));
    }

    #[test]
    fn required_miss_fails() {
        let mut reqs = vec![
            fixed("a", true, false),
            fixed("b", false, false),
            fixed("c", true, false),
        ];
        let mut ui = MockUI::new();

        let report = check_all(&mut reqs, &mut ui);

        let required: Vec<_> = report.missing_required.iter().map(|r| r.name.as_str()).collect();
        let optional: Vec<_> = report.missing_optional.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(required, vec!["a", "c"]);
        assert_eq!(optional, vec!["b"]);
        assert!(!report.success());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn optional_miss_succeeds_but_is_not_clean() {
        let mut reqs = vec![fixed("a", true, true), fixed("b", false, false)];
        let mut ui = MockUI::new();

        let report = check_all(&mut reqs, &mut ui);

        assert!(report.success());
        assert!(!report.is_fully_clean());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn unchecked_requirements_count_as_missing() {
        let reqs = vec![fixed("a", true, true)];
        let report = Report::from_requirements(&reqs);
        assert!(!report.success());
    }

    #[test]
    fn empty_list_is_clean() {
        let mut reqs: Vec<Requirement> = Vec::new();
        let mut ui = MockUI::new();
        let report = check_all(&mut reqs, &mut ui);
        assert!(report.success());
        assert!(report.is_fully_clean());
    }

    #[test]
    fn check_and_report_renders_header_and_summary() {
        let mut reqs = vec![fixed("a", true, true)];
        let mut ui = MockUI::new();

        let report = check_and_report(&mut reqs, &mut ui);

        assert!(report.success());
        assert!(ui.headers()[0].contains("Checking requirements for pr-cleaner-ai"));
        assert!(ui.has_success("All requirements met!"));
    }

    #[test]
    fn report_serializes_missing_names() {
        let mut reqs = vec![fixed("a", true, false), fixed("b", false, true)];
        let mut ui = MockUI::new();
        let report = check_all(&mut reqs, &mut ui);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["all_required_satisfied"], false);
        assert_eq!(json["missing_required"], serde_json::json!(["a"]));
        assert_eq!(json["missing_optional"], serde_json::json!([]));
        assert_eq!(json["requirements"][1]["installed"], true);
    }
}
