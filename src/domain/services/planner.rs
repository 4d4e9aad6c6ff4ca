//! Reconcile planning service
//!
//! Pure domain logic deciding the status of every desired file against a
//! directory snapshot. No I/O happens here; the reconciler performs the
//! writes and deletes the plan describes.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::domain::entities::{DesiredFile, DirectorySnapshot, FileState};
use crate::domain::value_objects::FileStatus;

use super::orphan_detector::OrphanDetector;

/// A desired file with its decided status
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedFile {
    /// Position in the desired file list
    pub index: usize,
    pub file: DesiredFile,
    pub status: FileStatus,
}

impl PlannedFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn should_write(&self) -> bool {
        self.status.needs_write()
    }
}

/// Several desired files mapped to one target path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub path: PathBuf,
    /// Original names of the colliding assets, in input order
    pub sources: Vec<String>,
}

/// Result of planning a reconcile pass
#[derive(Debug, Clone, Default)]
pub struct ReconcilePlan {
    /// Planned files in input order
    pub files: Vec<PlannedFile>,
    /// Target paths written more than once
    pub collisions: Vec<Collision>,
    /// Managed files to delete once every write has completed
    pub orphans: Vec<PathBuf>,
}

impl ReconcilePlan {
    pub fn write_count(&self) -> usize {
        self.files.iter().filter(|f| f.should_write()).count()
    }

    pub fn unchanged_count(&self) -> usize {
        self.files.len() - self.write_count()
    }

    /// Planned files grouped by target path
    ///
    /// Groups are ordered by their first occurrence; files within a group
    /// keep input order so the last one wins.
    pub fn groups(&self) -> Vec<Vec<&PlannedFile>> {
        let mut order: Vec<&Path> = Vec::new();
        let mut groups: HashMap<&Path, Vec<&PlannedFile>> = HashMap::new();
        for planned in &self.files {
            let entry = groups.entry(planned.path()).or_default();
            if entry.is_empty() {
                order.push(planned.path());
            }
            entry.push(planned);
        }
        order
            .into_iter()
            .filter_map(|path| groups.remove(path))
            .collect()
    }
}

/// Pure planning service
pub struct Planner;

impl Planner {
    /// Plan one batch
    ///
    /// `keep_base_names` protects files from orphan deletion; it includes
    /// assets whose rendering failed so their previous output survives.
    pub fn plan(
        desired: Vec<DesiredFile>,
        snapshot: &DirectorySnapshot,
        keep_base_names: &BTreeSet<String>,
    ) -> ReconcilePlan {
        // Content the path will hold once earlier files in this batch are applied
        let mut overlay: HashMap<PathBuf, usize> = HashMap::new();
        let mut sources: HashMap<PathBuf, Vec<String>> = HashMap::new();
        let mut collision_order: Vec<PathBuf> = Vec::new();
        let mut files: Vec<PlannedFile> = Vec::with_capacity(desired.len());

        for (index, file) in desired.into_iter().enumerate() {
            let status = match overlay.get(file.path()) {
                Some(&earlier) => {
                    Self::status_against(&file, files[earlier].file.content().as_bytes())
                }
                None => Self::status_for(&file, snapshot.state(file.path())),
            };

            let names = sources.entry(file.path().to_path_buf()).or_default();
            names.push(file.source().to_string());
            if names.len() == 2 {
                collision_order.push(file.path().to_path_buf());
            }

            overlay.insert(file.path().to_path_buf(), files.len());
            files.push(PlannedFile {
                index,
                file,
                status,
            });
        }

        let collisions = collision_order
            .into_iter()
            .map(|path| {
                let sources = sources.remove(&path).unwrap_or_default();
                Collision { path, sources }
            })
            .collect();

        ReconcilePlan {
            files,
            collisions,
            orphans: OrphanDetector::detect(snapshot, keep_base_names),
        }
    }

    /// Status of a file against the snapshot
    pub fn status_for(file: &DesiredFile, state: &FileState) -> FileStatus {
        match state {
            FileState::Absent => FileStatus::Added,
            FileState::Present(existing) => Self::status_against(file, existing),
            FileState::Unreadable => FileStatus::Updated,
        }
    }

    fn status_against(file: &DesiredFile, existing: &[u8]) -> FileStatus {
        if file.matches(existing) {
            FileStatus::Unchanged
        } else {
            FileStatus::Updated
        }
    }
}
