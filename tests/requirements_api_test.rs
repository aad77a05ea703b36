//! Requirement checking through the public API.

use pr_cleaner_ai::requirements::{check_all, check_and_report, Requirement};
use pr_cleaner_ai::ui::{MockUI, UserInterface};

fn probe(name: &str, required: bool, installed: bool) -> Requirement {
    let label = name.to_string();
    Requirement::new(name, move |ui: &mut dyn UserInterface| {
        if installed {
            ui.success(&format!("{}: v1.0.0", label));
        } else {
            ui.error(&format!("{}: NOT INSTALLED", label));
        }
        installed
    })
    .required(required)
    .description(format!("Needed for {}", name))
    .install_instructions(format!("Install {}", name))
}

#[test]
fn required_miss_exits_one() {
    let mut requirements = vec![
        probe("Node.js", true, true),
        probe("Git", true, true),
        probe("GitHub CLI (gh)", true, false),
        probe("tsx", true, true),
    ];
    let mut ui = MockUI::new();

    let report = check_and_report(&mut requirements, &mut ui);

    assert!(!report.success());
    assert_eq!(report.exit_code(), 1);
    let missing: Vec<_> = report.missing_required.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(missing, vec!["GitHub CLI (gh)"]);
    assert!(ui.has_hint("Install GitHub CLI (gh)"));
    assert!(ui.has_error("You cannot run the tool"));
}

#[test]
fn optional_miss_exits_zero_but_not_clean() {
    let mut requirements = vec![probe("Git", true, true), probe("tsx", false, false)];
    let mut ui = MockUI::new();

    let report = check_and_report(&mut requirements, &mut ui);

    assert!(report.success());
    assert!(!report.is_fully_clean());
    assert_eq!(report.exit_code(), 0);
    assert!(!ui.has_success("All requirements met!"));
    assert!(ui.has_warning("Optional tools"));
}

#[test]
fn success_ignores_optional_misses() {
    for optional_installed in [true, false] {
        let mut requirements = vec![
            probe("Git", true, true),
            probe("extra", false, optional_installed),
        ];
        let mut ui = MockUI::new();
        let report = check_all(&mut requirements, &mut ui);
        assert_eq!(report.success(), report.missing_required.is_empty());
        assert!(report.success());
    }
}

#[test]
fn installed_is_recorded_per_requirement() {
    let mut requirements = vec![probe("a", true, false), probe("b", false, true)];
    let mut ui = MockUI::new();

    assert!(requirements.iter().all(|r| r.installed.is_none()));
    check_all(&mut requirements, &mut ui);

    assert_eq!(requirements[0].installed, Some(false));
    assert_eq!(requirements[1].installed, Some(true));
}
