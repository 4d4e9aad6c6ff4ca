//! Output kind value object - which file representations to materialize

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every extension any output kind can produce.
///
/// Orphan detection treats files with these extensions as managed, whether or
/// not the corresponding kind is enabled for the current run.
pub const MANAGED_EXTENSIONS: [&str; 3] = ["svg", "tsx", "jsx"];

/// A file representation the tool can materialize for an asset
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum OutputKind {
    /// Plain vector graphic file
    #[serde(rename = "svg")]
    #[value(name = "svg")]
    RawGraphic,
    /// Generated UI code component
    #[serde(rename = "react", alias = "component")]
    #[value(name = "react", alias = "component")]
    CodeComponent,
}

impl OutputKind {
    /// All kinds in materialization order
    pub const ALL: [OutputKind; 2] = [OutputKind::RawGraphic, OutputKind::CodeComponent];

    /// File extension (without the dot) for this kind
    ///
    /// Code components are written as `.tsx` when typed, `.jsx` otherwise.
    pub fn extension(&self, typed: bool) -> &'static str {
        match self {
            OutputKind::RawGraphic => "svg",
            OutputKind::CodeComponent if typed => "tsx",
            OutputKind::CodeComponent => "jsx",
        }
    }

    /// Config/CLI name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::RawGraphic => "svg",
            OutputKind::CodeComponent => "react",
        }
    }

    /// Parse a config/CLI name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "svg" => Some(OutputKind::RawGraphic),
            "react" | "component" => Some(OutputKind::CodeComponent),
            _ => None,
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a file extension belongs to a managed output kind
pub fn is_managed_extension(ext: &str) -> bool {
    MANAGED_EXTENSIONS.contains(&ext)
}
