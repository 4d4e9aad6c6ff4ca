//! Code component policy value object

use serde::{Deserialize, Serialize};

/// Export style of a generated component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    /// `export function Name`
    #[default]
    Named,
    /// `export default function Name`
    Default,
}

/// Settings for the code component output kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPolicy {
    /// Emit type annotations (and a `.tsx` extension)
    #[serde(default = "default_true")]
    pub typescript: bool,

    #[serde(default)]
    pub export_type: ExportStyle,

    /// Prepended to the component identifier
    #[serde(default)]
    pub component_prefix: Option<String>,
}

impl ComponentPolicy {
    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn with_export_type(mut self, export_type: ExportStyle) -> Self {
        self.export_type = export_type;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.component_prefix = Some(prefix.into());
        self
    }
}

impl Default for ComponentPolicy {
    fn default() -> Self {
        Self {
            typescript: true,
            export_type: ExportStyle::Named,
            component_prefix: None,
        }
    }
}

fn default_true() -> bool {
    true
}
