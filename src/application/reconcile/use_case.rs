//! Reconcile Use Case
//!
//! Orchestrates one reconciliation pass:
//! 1. Load raw assets and apply include/exclude filters
//! 2. Normalize every surviving asset once and render it for every enabled
//!    output kind
//! 3. Reconcile the rendered files against the output directory
//! 4. Fold per-asset outcomes into a single batch report
//!
//! Rendering failures are isolated per asset and output kind; only
//! conditions that make the whole pass meaningless abort it.

use std::collections::BTreeSet;
use std::path::{Component, Path};
use std::sync::Arc;

use rayon::prelude::*;

use crate::domain::entities::{DesiredFile, RawAsset};
use crate::domain::ports::{
    AssetRepository, FileSystem, NoopEventSink, ReconcileEvent, ReconcileEventSink,
};
use crate::domain::services::{normalize, to_code_component, transform, ContentError};
use crate::domain::value_objects::{FileStatus, OutputKind};
use crate::error::{IconsyncError, IconsyncResult};

use super::options::ReconcileOptions;
use super::reconciler::DirectoryReconciler;
use super::result::{AssetFailure, BatchReport};

/// Rendered outputs of one asset
#[derive(Debug)]
enum Prepared {
    /// Not rendered because the pass was cancelled
    Skipped,
    Rendered {
        base_name: String,
        files: Vec<DesiredFile>,
        failures: Vec<AssetFailure>,
    },
}

/// Reconcile use case - drives assets through rendering and reconciliation
pub struct ReconcileUseCase<AR, FS>
where
    AR: AssetRepository,
    FS: FileSystem,
{
    asset_repo: AR,
    file_system: FS,
}

impl<AR, FS> ReconcileUseCase<AR, FS>
where
    AR: AssetRepository,
    FS: FileSystem,
{
    pub fn new(asset_repo: AR, file_system: FS) -> Self {
        Self {
            asset_repo,
            file_system,
        }
    }

    /// Load assets from the repository and reconcile them
    pub fn execute(&self, options: &ReconcileOptions) -> IconsyncResult<BatchReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Load assets and reconcile them, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &ReconcileOptions,
        event_sink: Arc<dyn ReconcileEventSink>,
    ) -> IconsyncResult<BatchReport> {
        let assets = self.asset_repo.load_all()?;
        self.run_with_events(assets, options, event_sink)
    }

    /// Reconcile an already loaded batch
    pub fn run(
        &self,
        assets: Vec<RawAsset>,
        options: &ReconcileOptions,
    ) -> IconsyncResult<BatchReport> {
        self.run_with_events(assets, options, Arc::new(NoopEventSink))
    }

    pub fn run_with_events(
        &self,
        assets: Vec<RawAsset>,
        options: &ReconcileOptions,
        event_sink: Arc<dyn ReconcileEventSink>,
    ) -> IconsyncResult<BatchReport> {
        let mut report = BatchReport::new();

        // An empty batch must never reach the directory: it would delete everything
        if assets.is_empty() {
            tracing::info!("no assets; nothing to reconcile");
            return Ok(report);
        }

        let total = assets.len();
        let assets = options.filter.apply(assets);
        if assets.is_empty() {
            tracing::info!(filtered_out = total, "every asset was filtered out");
            return Ok(report);
        }
        if options.kinds.is_empty() {
            return Err(IconsyncError::NoOutputKinds);
        }

        event_sink.on_event(ReconcileEvent::Started {
            directory: options.directory.clone(),
            asset_count: assets.len(),
            filtered_out: total - assets.len(),
        });

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.jobs)
            .build()?;

        let prepared: Vec<Prepared> = pool.install(|| {
            assets
                .par_iter()
                .map(|asset| Self::prepare(asset, options))
                .collect()
        });

        let mut desired = Vec::new();
        let mut keep_base_names = BTreeSet::new();
        for item in prepared {
            let Prepared::Rendered {
                base_name,
                files,
                failures,
            } = item
            else {
                continue;
            };
            // Failed assets still protect their previous output
            keep_base_names.insert(base_name);
            desired.extend(files);
            for failure in failures {
                tracing::warn!(source = %failure.source, error = %failure.error, "asset failed");
                event_sink.on_event(ReconcileEvent::AssetFailed {
                    source: failure.source.clone(),
                    error: failure.error.clone(),
                });
                report.errors.push(failure);
            }
        }

        event_sink.on_event(ReconcileEvent::Prepared {
            file_count: desired.len(),
        });

        let outcome = DirectoryReconciler::new(
            &self.file_system,
            &options.directory,
            &options.cancel,
            event_sink.as_ref(),
        )
        .with_dry_run(options.dry_run)
        .reconcile(desired, &keep_base_names, &pool)?;

        for (path, status) in outcome.written {
            match status {
                FileStatus::Added => report.added.push(path),
                FileStatus::Updated => report.updated.push(path),
                FileStatus::Unchanged => report.unchanged.push(path),
                FileStatus::Deleted => report.deleted.push(path),
            }
        }
        report.deleted.extend(outcome.deleted);
        report.errors.extend(outcome.errors);
        report.collisions = outcome.collisions.into_iter().map(|c| c.path).collect();
        report.cancelled = outcome.cancelled;

        tracing::info!(
            added = report.added.len(),
            updated = report.updated.len(),
            unchanged = report.unchanged.len(),
            deleted = report.deleted.len(),
            errors = report.errors.len(),
            dry_run = options.dry_run,
            "reconcile finished"
        );
        event_sink.on_event(ReconcileEvent::Completed {
            added: report.added.len(),
            updated: report.updated.len(),
            unchanged: report.unchanged.len(),
            deleted: report.deleted.len(),
            errors: report.errors.len(),
        });

        Ok(report)
    }

    /// Render one asset for every enabled kind
    fn prepare(asset: &RawAsset, options: &ReconcileOptions) -> Prepared {
        if options.cancel.is_cancelled() {
            return Prepared::Skipped;
        }

        let base_name = transform(asset.name(), &options.naming);
        let source = asset.original_name();
        let mut files = Vec::new();
        let mut failures = Vec::new();

        if let Err(reason) = check_base_name(&base_name) {
            failures.push(AssetFailure::new(source, reason));
            return Prepared::Rendered {
                base_name,
                files,
                failures,
            };
        }

        // Every kind is rendered from the same normalized markup
        let normalized = normalize(asset.content(), &options.optimization);

        for &kind in &options.kinds {
            let rendered = match (&normalized, kind) {
                (Err(e), _) => Err(e.clone()),
                (Ok(markup), OutputKind::RawGraphic) => Ok(markup.clone()),
                (Ok(markup), OutputKind::CodeComponent) => {
                    to_code_component(&base_name, markup, &options.component)
                }
            };
            match rendered {
                Ok(content) => {
                    let path = options
                        .directory
                        .join(format!("{base_name}.{}", options.extension(kind)));
                    files.push(DesiredFile::new(path, content, kind, &base_name, source));
                }
                Err(e) => failures.push(kind_failure(source, kind, e)),
            }
        }

        Prepared::Rendered {
            base_name,
            files,
            failures,
        }
    }
}

fn kind_failure(source: &str, kind: OutputKind, error: ContentError) -> AssetFailure {
    AssetFailure::new(source, format!("{kind}: {error}"))
}

/// Reject base names that cannot be written inside the output directory
fn check_base_name(base_name: &str) -> Result<(), &'static str> {
    if base_name.trim().is_empty() {
        return Err("name transforms to an empty file name");
    }
    let inside = Path::new(base_name)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if inside {
        Ok(())
    } else {
        Err("name resolves outside the output directory")
    }
}
