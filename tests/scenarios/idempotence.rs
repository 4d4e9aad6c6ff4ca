//! Scenario: repeated syncs of an unchanged design file

use std::time::Duration;

use iconsync::domain::value_objects::{ComponentPolicy, OptimizationPolicy, OutputKind};
use iconsync::{NameTransform, NamingPolicy, ReconcileOptions};
use tempfile::tempdir;

use crate::common::{ARROW, EDITOR_EXPORT, STAR};
use crate::{asset, sync};

#[test]
fn second_run_reports_everything_unchanged() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path())
        .with_kinds(vec![OutputKind::RawGraphic, OutputKind::CodeComponent])
        .with_naming(NamingPolicy::new(NameTransform::KebabCase));
    let batch = || vec![asset("Arrow Right", ARROW), asset("Star", STAR)];

    let first = sync(batch(), &options);
    assert_eq!(first.added.len(), 4);

    let second = sync(batch(), &options);
    assert!(second.added.is_empty());
    assert!(second.updated.is_empty());
    assert!(second.deleted.is_empty());
    assert_eq!(second.unchanged.len(), 4);
}

#[test]
fn unchanged_files_are_not_rewritten() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path());
    sync(vec![asset("arrow", ARROW)], &options);

    let path = dir.path().join("arrow.svg");
    let before = std::fs::metadata(&path).unwrap().modified().unwrap();
    std::thread::sleep(Duration::from_millis(20));

    let report = sync(vec![asset("arrow", ARROW)], &options);

    let after = std::fs::metadata(&path).unwrap().modified().unwrap();
    assert_eq!(report.unchanged, vec![path]);
    assert_eq!(before, after);
}

#[test]
fn optimized_output_is_stable() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path())
        .with_optimization(OptimizationPolicy::enabled());

    sync(vec![asset("arrow", EDITOR_EXPORT)], &options);
    let written = std::fs::read_to_string(dir.path().join("arrow.svg")).unwrap();
    assert!(!written.contains("<title>"));
    assert!(!written.contains("<?xml"));

    let report = sync(vec![asset("arrow", EDITOR_EXPORT)], &options);
    assert_eq!(report.unchanged.len(), 1);
}

#[test]
fn switching_component_language_keeps_old_extension() {
    let dir = tempdir().unwrap();
    let typed = ReconcileOptions::new(dir.path()).with_kinds(vec![OutputKind::CodeComponent]);
    sync(vec![asset("arrow", ARROW)], &typed);

    let untyped = ReconcileOptions::new(dir.path())
        .with_kinds(vec![OutputKind::CodeComponent])
        .with_component(ComponentPolicy::default().with_typescript(false));
    let report = sync(vec![asset("arrow", ARROW)], &untyped);

    // Orphans are decided by base name, and `arrow` is still in the batch
    assert_eq!(report.added, vec![dir.path().join("arrow.jsx")]);
    assert!(report.deleted.is_empty());
    assert!(dir.path().join("arrow.tsx").exists());
}

#[test]
fn optimized_component_drops_what_the_svg_drops() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path())
        .with_kinds(vec![OutputKind::RawGraphic, OutputKind::CodeComponent])
        .with_optimization(OptimizationPolicy::enabled());

    let report = sync(vec![asset("arrow", EDITOR_EXPORT)], &options);

    assert!(report.is_success(), "{:?}", report.errors);
    let svg = std::fs::read_to_string(dir.path().join("arrow.svg")).unwrap();
    let component = std::fs::read_to_string(dir.path().join("arrow.tsx")).unwrap();
    assert!(!svg.contains("<title>"));
    assert!(!component.contains("<title>"), "{component}");
    assert!(!component.contains("Generator"), "{component}");
    assert!(component.contains(r#"<path d="M0 0h24"/>"#), "{component}");
}

