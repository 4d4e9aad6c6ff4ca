//! Scenario: an icon is renamed in the design tool

use iconsync::ReconcileOptions;
use tempfile::tempdir;

use crate::common::{ARROW, STAR};
use crate::{asset, file_names, sync};

#[test]
fn renamed_icon_replaces_old_file() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path());

    sync(vec![asset("old-icon", ARROW)], &options);
    assert_eq!(file_names(dir.path()), vec!["old-icon.svg"]);

    let report = sync(vec![asset("new-icon", ARROW)], &options);

    assert_eq!(report.added, vec![dir.path().join("new-icon.svg")]);
    assert_eq!(report.deleted, vec![dir.path().join("old-icon.svg")]);
    assert_eq!(file_names(dir.path()), vec!["new-icon.svg"]);
}

#[test]
fn unmanaged_files_survive_every_run() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("index.ts"), "export * from './arrow';").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hand written").unwrap();
    let options = ReconcileOptions::new(dir.path());

    sync(vec![asset("arrow", ARROW)], &options);
    sync(vec![asset("star", STAR)], &options);

    assert_eq!(file_names(dir.path()), vec!["index.ts", "notes.txt", "star.svg"]);
}

#[test]
fn empty_batch_never_deletes() {
    let dir = tempdir().unwrap();
    let options = ReconcileOptions::new(dir.path());
    sync(vec![asset("arrow", ARROW), asset("star", STAR)], &options);

    let report = sync(Vec::new(), &options);

    assert_eq!(report, iconsync::BatchReport::default());
    assert_eq!(file_names(dir.path()), vec!["arrow.svg", "star.svg"]);
}

#[test]
fn subdirectories_are_not_scanned() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("legacy")).unwrap();
    std::fs::write(dir.path().join("legacy/old.svg"), STAR).unwrap();
    let options = ReconcileOptions::new(dir.path());

    let report = sync(vec![asset("arrow", ARROW)], &options);

    assert!(report.deleted.is_empty());
    assert!(dir.path().join("legacy/old.svg").exists());
}
