//! Scenario: one bad asset in an otherwise healthy batch

use iconsync::domain::value_objects::OutputKind;
use iconsync::ReconcileOptions;
use tempfile::tempdir;

use crate::common::{ARROW, NOT_A_GRAPHIC, STAR};
use crate::{asset, file_names, sync};

#[test]
fn malformed_asset_does_not_block_the_batch() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path()).with_kinds(vec![OutputKind::CodeComponent]);

    let report = sync(
        vec![
            asset("one", ARROW),
            asset("two", NOT_A_GRAPHIC),
            asset("three", STAR),
        ],
        &options,
    );

    assert_eq!(report.added.len(), 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].source, "two");
    assert!(report.errors[0].error.contains("malformed content"));
    assert!(!report.is_success());
    assert_eq!(file_names(dir.path()), vec!["one.tsx", "three.tsx"]);
}

#[test]
fn failed_asset_keeps_its_previous_output() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path()).with_kinds(vec![OutputKind::CodeComponent]);
    sync(vec![asset("one", ARROW), asset("two", STAR)], &options);

    let report = sync(
        vec![asset("one", ARROW), asset("two", NOT_A_GRAPHIC)],
        &options,
    );

    assert!(report.deleted.is_empty());
    assert_eq!(report.errors.len(), 1);
    let kept = std::fs::read_to_string(dir.path().join("two.tsx")).unwrap();
    assert!(kept.contains("M12 2l3 7h7"));
}

#[test]
fn escaping_name_is_an_asset_error() {
    let dir = tempdir().unwrap();
    let naming = iconsync::NamingPolicy::default().with_sanitize(false);
    let options = ReconcileOptions::new(dir.path()).with_naming(naming);

    let report = sync(vec![asset("../evil", ARROW), asset("fine", ARROW)], &options);

    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].source, "../evil");
    assert_eq!(file_names(dir.path()), vec!["fine.svg"]);
    assert!(!dir.path().parent().unwrap().join("evil.svg").exists());
}
