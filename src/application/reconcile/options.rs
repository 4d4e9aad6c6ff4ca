//! Reconcile Options
//!
//! Typed, validated settings for one reconcile pass.

use std::path::PathBuf;

use crate::domain::services::AssetFilter;
use crate::domain::value_objects::{
    ComponentPolicy, NamingPolicy, OptimizationPolicy, OutputKind,
};

use super::cancel::CancelToken;

/// Options for the reconcile use case
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Output directory; every written or deleted path lies inside it
    pub directory: PathBuf,
    /// Output kinds to materialize, in order
    pub kinds: Vec<OutputKind>,
    pub naming: NamingPolicy,
    pub optimization: OptimizationPolicy,
    pub component: ComponentPolicy,
    /// Include/exclude rules over original names
    pub filter: AssetFilter,
    /// Worker threads; 0 selects the available parallelism
    pub jobs: usize,
    /// Compute the report without touching the directory
    pub dry_run: bool,
    pub cancel: CancelToken,
}

impl ReconcileOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            kinds: vec![OutputKind::RawGraphic],
            naming: NamingPolicy::default(),
            optimization: OptimizationPolicy::default(),
            component: ComponentPolicy::default(),
            filter: AssetFilter::allow_all(),
            jobs: 0,
            dry_run: false,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_kinds(mut self, kinds: Vec<OutputKind>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_optimization(mut self, optimization: OptimizationPolicy) -> Self {
        self.optimization = optimization;
        self
    }

    pub fn with_component(mut self, component: ComponentPolicy) -> Self {
        self.component = component;
        self
    }

    pub fn with_filter(mut self, filter: AssetFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Extension written for a kind under these options
    pub fn extension(&self, kind: OutputKind) -> &'static str {
        kind.extension(self.component.typescript)
    }
}
