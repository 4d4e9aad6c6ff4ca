//! Orphan detection
//!
//! A managed file is orphaned when its base name is not produced by any
//! asset in the current batch. Unmanaged files are never touched.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::DirectorySnapshot;
use crate::domain::value_objects::is_managed_extension;

pub struct OrphanDetector;

impl OrphanDetector {
    /// Managed snapshot entries whose base name is not kept, sorted by path
    pub fn detect(snapshot: &DirectorySnapshot, keep_base_names: &BTreeSet<String>) -> Vec<PathBuf> {
        let mut orphans: Vec<PathBuf> = snapshot
            .listed()
            .iter()
            .filter(|path| is_managed(path))
            .filter(|path| match base_name(path) {
                Some(base) => !keep_base_names.contains(base),
                None => false,
            })
            .cloned()
            .collect();
        orphans.sort();
        orphans
    }
}

/// Whether a path carries one of the managed extensions
pub fn is_managed(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_managed_extension)
}

/// File name without its final extension
pub fn base_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|stem| stem.to_str())
}
