//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::reconcile::ReconcileOptions;
use crate::domain::services::AssetFilter;
use crate::domain::value_objects::{
    ComponentPolicy, NamingPolicy, OptimizationPolicy, OutputKind,
};
use crate::error::{IconsyncError, IconsyncResult};

use super::loader::{self, ConfigWarning};

/// Output directory and enabled output kinds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_formats")]
    pub formats: Vec<OutputKind>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            formats: default_formats(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("icons")
}

fn default_formats() -> Vec<OutputKind> {
    vec![OutputKind::RawGraphic]
}

/// Include/exclude regular expressions over original asset names
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub include: Option<String>,

    #[serde(default)]
    pub exclude: Option<String>,
}

/// Sync configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SyncConfig {
    /// Worker threads; 0 selects the available parallelism
    #[serde(default)]
    pub jobs: usize,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub naming: NamingPolicy,

    #[serde(default)]
    pub optimize: OptimizationPolicy,

    #[serde(default)]
    pub react: ComponentPolicy,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub sync: SyncConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IconsyncResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IconsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load an explicit config file, or `iconsync.toml` if present, or defaults
    ///
    /// Environment overrides are applied in every case.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> IconsyncResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (ICONSYNC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Validate and compile into the options of one reconcile pass
    pub fn settings(&self) -> IconsyncResult<ReconcileOptions> {
        if self.output.formats.is_empty() {
            return Err(IconsyncError::NoOutputKinds);
        }

        let mut kinds: Vec<OutputKind> = Vec::with_capacity(self.output.formats.len());
        for kind in &self.output.formats {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }

        let filter = AssetFilter::new(
            non_blank(self.filter.include.as_deref()),
            non_blank(self.filter.exclude.as_deref()),
        )?;

        Ok(ReconcileOptions::new(&self.output.directory)
            .with_kinds(kinds)
            .with_naming(self.naming)
            .with_optimization(self.optimize.clone())
            .with_component(self.react.clone())
            .with_filter(filter)
            .with_jobs(self.sync.jobs))
    }
}

fn non_blank(pattern: Option<&str>) -> Option<&str> {
    pattern.filter(|p| !p.trim().is_empty())
}
