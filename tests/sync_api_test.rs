//! Rules file sync through the public API.

use pr_cleaner_ai::sync::{destination_path, run_install_hook, ArtifactSync, SyncOutcome};
use std::fs;
use tempfile::TempDir;

#[test]
fn packaged_template_under_node_modules_is_found() {
    let temp = TempDir::new().unwrap();
    let packaged = temp
        .path()
        .join("node_modules/pr-cleaner-ai/config/pr-cleaner-ai.mdc");
    fs::create_dir_all(packaged.parent().unwrap()).unwrap();
    fs::write(&packaged, "packaged rules").unwrap();

    let outcome = run_install_hook(false, temp.path(), None, &[]);

    assert_eq!(outcome, Some(SyncOutcome::Created { source: packaged }));
    assert_eq!(
        fs::read_to_string(destination_path(temp.path())).unwrap(),
        "packaged rules"
    );
}

#[test]
fn install_dir_candidates_follow_node_modules() {
    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("pkg/bin");
    fs::create_dir_all(&bin).unwrap();
    let sibling = temp.path().join("pkg/config/pr-cleaner-ai.mdc");
    fs::create_dir_all(sibling.parent().unwrap()).unwrap();
    fs::write(&sibling, "sibling").unwrap();
    let project = temp.path().join("project");
    fs::create_dir_all(&project).unwrap();

    let sync = ArtifactSync::for_project(&project, Some(&bin), &[]);

    assert!(matches!(sync.sync(), SyncOutcome::Created { .. }));
    assert_eq!(
        fs::read_to_string(destination_path(&project)).unwrap(),
        "sibling"
    );
}

#[test]
fn repeated_sync_is_updated() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("template.mdc");
    fs::write(&template, "rules").unwrap();
    let sync = ArtifactSync::for_project(temp.path(), None, &[template]);

    assert!(matches!(sync.sync(), SyncOutcome::Created { .. }));
    for _ in 0..3 {
        assert!(matches!(sync.sync(), SyncOutcome::Updated { .. }));
    }
}

#[test]
fn ci_gate_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let template = temp.path().join("template.mdc");
    fs::write(&template, "rules").unwrap();

    assert_eq!(run_install_hook(true, temp.path(), None, &[template]), None);
    assert!(!temp.path().join(".cursor").exists());
}
