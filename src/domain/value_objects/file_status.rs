//! File status value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of reconciling one file against the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Did not exist, written
    Added,
    /// Existed with different bytes, overwritten
    Updated,
    /// Existed with identical bytes, left untouched
    Unchanged,
    /// Orphaned managed file, removed
    Deleted,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Added => "added",
            FileStatus::Updated => "updated",
            FileStatus::Unchanged => "unchanged",
            FileStatus::Deleted => "deleted",
        }
    }

    /// Whether this status requires writing the desired content
    pub fn needs_write(&self) -> bool {
        matches!(self, FileStatus::Added | FileStatus::Updated)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
