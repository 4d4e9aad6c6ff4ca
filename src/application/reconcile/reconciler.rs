//! Directory Reconciler
//!
//! Applies a batch of desired files to one output directory:
//! 1. Ensure the directory exists (batch-fatal on failure)
//! 2. Snapshot it once
//! 3. Plan statuses against the snapshot
//! 4. Write changed files, grouped by path, in parallel; statuses within a
//!    group follow the writes that actually landed
//! 5. After every write has finished, delete orphans

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::domain::entities::{DesiredFile, DirectorySnapshot, FileState};
use crate::domain::ports::{FileSystem, ReconcileEvent, ReconcileEventSink};
use crate::domain::services::{is_managed, Collision, PlannedFile, Planner, ReconcilePlan};
use crate::domain::value_objects::FileStatus;
use crate::error::{IconsyncError, IconsyncResult};

use super::cancel::CancelToken;
use super::result::AssetFailure;

/// What the reconciler did to the directory
#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    /// Desired files with their status, in input order
    pub written: Vec<(PathBuf, FileStatus)>,
    pub deleted: Vec<PathBuf>,
    pub errors: Vec<AssetFailure>,
    pub collisions: Vec<Collision>,
    /// Orphan detection was skipped because the pass was cancelled
    pub cancelled: bool,
}

/// Reconciles desired files against one directory
pub struct DirectoryReconciler<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
    directory: &'a Path,
    dry_run: bool,
    cancel: &'a CancelToken,
    events: &'a dyn ReconcileEventSink,
}

impl<'a, FS: FileSystem + ?Sized> DirectoryReconciler<'a, FS> {
    pub fn new(
        fs: &'a FS,
        directory: &'a Path,
        cancel: &'a CancelToken,
        events: &'a dyn ReconcileEventSink,
    ) -> Self {
        Self {
            fs,
            directory,
            dry_run: false,
            cancel,
            events,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Reconcile one batch
    ///
    /// `keep_base_names` is the union of base names produced by the batch;
    /// managed files outside it are deleted.
    pub fn reconcile(
        &self,
        desired: Vec<DesiredFile>,
        keep_base_names: &BTreeSet<String>,
        pool: &ThreadPool,
    ) -> IconsyncResult<ReconcileOutcome> {
        self.ensure_directory()?;
        let snapshot = self.snapshot(&desired)?;
        let plan = Planner::plan(desired, &snapshot, keep_base_names);

        for collision in &plan.collisions {
            tracing::warn!(
                path = %collision.path.display(),
                sources = ?collision.sources,
                "several assets map to the same file; the last one wins"
            );
            self.events.on_event(ReconcileEvent::NameCollision {
                path: collision.path.clone(),
                sources: collision.sources.clone(),
            });
        }

        let mut outcome = ReconcileOutcome::default();
        self.apply_writes(&plan, &snapshot, pool, &mut outcome);

        // Orphans are only decided once every write above has returned
        if self.cancel.is_cancelled() {
            tracing::warn!("reconcile cancelled; skipping orphan detection");
            self.events.on_event(ReconcileEvent::Cancelled);
            outcome.cancelled = true;
        } else {
            self.delete_orphans(&plan.orphans, &mut outcome);
        }

        outcome.collisions = plan.collisions;
        Ok(outcome)
    }

    fn ensure_directory(&self) -> IconsyncResult<()> {
        if self.dry_run {
            return Ok(());
        }
        self.fs
            .create_dir_all(self.directory)
            .map_err(|e| IconsyncError::DirectoryCreate {
                path: self.directory.to_path_buf(),
                source: e.into_io(),
            })
    }

    /// List the directory and read every managed file once
    fn snapshot(&self, desired: &[DesiredFile]) -> IconsyncResult<DirectorySnapshot> {
        let mut snapshot = DirectorySnapshot::empty(self.directory);

        match self.fs.list_dir(self.directory) {
            Ok(entries) => {
                for entry in entries {
                    if !entry.is_file || !is_managed(&entry.path) {
                        continue;
                    }
                    let state = self.probe(&entry.path);
                    snapshot.insert_listed(entry.path, state);
                }
            }
            // A dry run never creates the directory
            Err(e) if self.dry_run && e.is_not_found() => {}
            Err(e) => {
                return Err(IconsyncError::DirectoryRead {
                    path: self.directory.to_path_buf(),
                    source: e.into_io(),
                })
            }
        }

        // Targets nested below the directory are not covered by the listing
        for file in desired {
            if file.path().parent() != Some(self.directory) && !snapshot.knows(file.path()) {
                let state = self.probe(file.path());
                snapshot.insert_probed(file.path().to_path_buf(), state);
            }
        }

        tracing::debug!(
            directory = %self.directory.display(),
            managed = snapshot.len(),
            "directory snapshot taken"
        );
        Ok(snapshot)
    }

    fn probe(&self, path: &Path) -> FileState {
        match self.fs.read(path) {
            Ok(bytes) => FileState::Present(bytes),
            Err(e) if e.is_not_found() => FileState::Absent,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read existing file; it will be rewritten");
                FileState::Unreadable
            }
        }
    }

    fn apply_writes(
        &self,
        plan: &ReconcilePlan,
        snapshot: &DirectorySnapshot,
        pool: &ThreadPool,
        outcome: &mut ReconcileOutcome,
    ) {
        let groups = plan.groups();
        let mut results: Vec<(usize, PathBuf, Result<FileStatus, AssetFailure>)> =
            pool.install(|| {
                groups
                    .par_iter()
                    .flat_map_iter(|group| self.apply_group(group, snapshot))
                    .collect()
            });
        results.sort_by_key(|(index, _, _)| *index);

        for (_, path, result) in results {
            match result {
                Ok(status) => outcome.written.push((path, status)),
                Err(failure) => outcome.errors.push(failure),
            }
        }
    }

    /// Apply the files of one target path in input order on one worker
    ///
    /// Each status is re-derived against what the path holds at that point,
    /// so a failed earlier write never makes a later file look unchanged.
    fn apply_group(
        &self,
        group: &[&PlannedFile],
        snapshot: &DirectorySnapshot,
    ) -> Vec<(usize, PathBuf, Result<FileStatus, AssetFailure>)> {
        let mut on_disk = match group.first() {
            Some(first) => snapshot.state(first.path()).clone(),
            None => return Vec::new(),
        };

        group
            .iter()
            .map(|planned| {
                let status = Planner::status_for(&planned.file, &on_disk);
                let result = self.apply(planned, status);
                if result.2.is_ok() && status.needs_write() {
                    on_disk = FileState::Present(planned.file.content().as_bytes().to_vec());
                }
                result
            })
            .collect()
    }

    fn apply(
        &self,
        planned: &PlannedFile,
        status: FileStatus,
    ) -> (usize, PathBuf, Result<FileStatus, AssetFailure>) {
        let path = planned.path().to_path_buf();
        let result = if status.needs_write() && !self.dry_run {
            self.fs
                .write(&path, planned.file.content())
                .map(|()| status)
                .map_err(|e| {
                    tracing::warn!(path = %path.display(), error = %e, "write failed");
                    AssetFailure::new(planned.file.source(), e)
                })
        } else {
            Ok(status)
        };

        match &result {
            Ok(status) => {
                tracing::debug!(path = %path.display(), %status, "reconciled");
                if self.events.wants_detailed_events() {
                    self.events.on_event(ReconcileEvent::FileReconciled {
                        path: path.clone(),
                        status: *status,
                    });
                }
            }
            Err(failure) => self.events.on_event(ReconcileEvent::AssetFailed {
                source: failure.source.clone(),
                error: failure.error.clone(),
            }),
        }

        (planned.index, path, result)
    }

    fn delete_orphans(&self, orphans: &[PathBuf], outcome: &mut ReconcileOutcome) {
        for path in orphans {
            if !self.dry_run {
                if let Err(e) = self.fs.remove(path) {
                    tracing::warn!(path = %path.display(), error = %e, "cannot delete orphan");
                    let failure = AssetFailure::new(path.display().to_string(), e);
                    self.events.on_event(ReconcileEvent::AssetFailed {
                        source: failure.source.clone(),
                        error: failure.error.clone(),
                    });
                    outcome.errors.push(failure);
                    continue;
                }
            }
            tracing::debug!(path = %path.display(), "orphan deleted");
            self.events
                .on_event(ReconcileEvent::OrphanDeleted { path: path.clone() });
            outcome.deleted.push(path.clone());
        }
    }
}
