//! DirectorySnapshot entity - the output directory as seen before a batch
//!
//! Taken once per batch. Every status decision and orphan decision is made
//! against this view, never against the live directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// What the snapshot knows about one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileState {
    /// No file at this path
    Absent,
    /// File exists with these bytes
    Present(Vec<u8>),
    /// File exists but its bytes could not be read
    Unreadable,
}

/// Listing and managed-file contents of one directory
#[derive(Debug, Clone, Default)]
pub struct DirectorySnapshot {
    directory: PathBuf,
    /// Flat listing of regular files
    listed: Vec<PathBuf>,
    /// Known states, keyed by full path
    states: BTreeMap<PathBuf, FileState>,
}

impl DirectorySnapshot {
    /// Snapshot of a directory that does not exist yet
    pub fn empty(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Record a file from the directory listing
    pub fn insert_listed(&mut self, path: PathBuf, state: FileState) {
        self.states.insert(path.clone(), state);
        self.listed.push(path);
    }

    /// Record a path probed outside the listing (nested target paths)
    pub fn insert_probed(&mut self, path: PathBuf, state: FileState) {
        self.states.insert(path, state);
    }

    /// Whether a path's state is known
    pub fn knows(&self, path: &Path) -> bool {
        self.states.contains_key(path)
    }

    /// State of a path; unknown paths inside a listed directory are absent
    pub fn state(&self, path: &Path) -> &FileState {
        self.states.get(path).unwrap_or(&FileState::Absent)
    }

    /// Files found by the listing, in listing order
    pub fn listed(&self) -> &[PathBuf] {
        &self.listed
    }

    pub fn len(&self) -> usize {
        self.listed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listed.is_empty()
    }
}
