//! DesiredFile entity - a file the current batch wants on disk
//!
//! Desired files are derived from a raw asset, an output kind and the batch
//! policies. They carry enough provenance to attribute failures and to
//! compute the set of base names that protects files from orphan deletion.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::OutputKind;

/// A rendered output file ready to be reconciled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredFile {
    /// Target path inside the output directory
    path: PathBuf,
    /// Rendered content
    content: String,
    /// Output kind this file materializes
    kind: OutputKind,
    /// Transformed base name shared by every kind of the same asset
    base_name: String,
    /// Original name of the asset that produced this file
    source: String,
}

impl DesiredFile {
    pub fn new(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        kind: OutputKind,
        base_name: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
            base_name: base_name.into(),
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> OutputKind {
        self.kind
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the bytes on disk already match this file
    pub fn matches(&self, existing: &[u8]) -> bool {
        self.content.as_bytes() == existing
    }
}
