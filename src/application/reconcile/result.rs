//! Batch Report
//!
//! The structured outcome of a reconcile pass.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A failure attributed to an asset (or to a path, for orphan deletions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetFailure {
    pub source: String,
    pub error: String,
}

impl AssetFailure {
    pub fn new(source: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            source: source.into(),
            error: error.to_string(),
        }
    }
}

/// Result of a reconcile pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub added: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
    pub errors: Vec<AssetFailure>,
    /// Target paths written by more than one asset
    pub collisions: Vec<PathBuf>,
    /// The pass was cancelled; orphan detection did not run
    pub cancelled: bool,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty() && !self.cancelled
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.updated.is_empty() || !self.deleted.is_empty()
    }

    /// Files this pass accounted for (errors excluded)
    pub fn total(&self) -> usize {
        self.added.len() + self.updated.len() + self.unchanged.len() + self.deleted.len()
    }

    /// One-line count summary
    pub fn summary(&self) -> String {
        format!(
            "{} added, {} updated, {} deleted, {} unchanged, {} errors",
            self.added.len(),
            self.updated.len(),
            self.deleted.len(),
            self.unchanged.len(),
            self.errors.len()
        )
    }
}
