//! Optimization policy value object

use serde::{Deserialize, Serialize};

/// A single structural cleanup pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizePlugin {
    /// Drop `<!DOCTYPE ...>`
    RemoveDoctype,
    /// Drop `<?xml ...?>` and other processing instructions
    RemoveXmlProcInst,
    /// Drop `<!-- ... -->`
    RemoveComments,
    /// Drop `<metadata>` subtrees
    RemoveMetadata,
    /// Drop `<title>` subtrees
    RemoveTitle,
    /// Drop `<desc>` subtrees
    RemoveDesc,
    /// Drop elements and attributes in editor namespaces (inkscape, sodipodi, sketch)
    RemoveEditorsNsData,
    /// Drop attributes whose value is empty
    RemoveEmptyAttrs,
    /// Drop whitespace-only text between elements
    CleanupWhitespace,
}

impl OptimizePlugin {
    /// The preset used when no plugin list is configured
    pub const DEFAULT_PRESET: [OptimizePlugin; 9] = [
        OptimizePlugin::RemoveDoctype,
        OptimizePlugin::RemoveXmlProcInst,
        OptimizePlugin::RemoveComments,
        OptimizePlugin::RemoveMetadata,
        OptimizePlugin::RemoveTitle,
        OptimizePlugin::RemoveDesc,
        OptimizePlugin::RemoveEditorsNsData,
        OptimizePlugin::RemoveEmptyAttrs,
        OptimizePlugin::CleanupWhitespace,
    ];
}

/// Whether and how raw graphics are optimized before being written
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptimizationPolicy {
    #[serde(default)]
    pub enabled: bool,

    /// `None` selects the default preset; an empty list runs no passes
    #[serde(default)]
    pub plugins: Option<Vec<OptimizePlugin>>,
}

impl OptimizationPolicy {
    /// Optimization enabled with the default preset
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            plugins: None,
        }
    }

    pub fn with_plugins(mut self, plugins: Vec<OptimizePlugin>) -> Self {
        self.plugins = Some(plugins);
        self
    }

    /// Plugins that actually run
    pub fn effective_plugins(&self) -> &[OptimizePlugin] {
        match &self.plugins {
            Some(plugins) => plugins,
            None => &OptimizePlugin::DEFAULT_PRESET,
        }
    }
}
