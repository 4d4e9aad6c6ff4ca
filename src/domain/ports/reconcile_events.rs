//! Reconcile Event Port
//!
//! Provides an observable interface for reconciliation passes.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::FileStatus;

/// Event emitted during a reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileEvent {
    /// Pass started, after filters were applied
    Started {
        directory: PathBuf,
        asset_count: usize,
        filtered_out: usize,
    },

    /// Desired files were rendered
    Prepared { file_count: usize },

    /// A desired file was reconciled (written or left untouched)
    FileReconciled { path: PathBuf, status: FileStatus },

    /// An asset (or one of its output kinds) failed
    AssetFailed { source: String, error: String },

    /// Several assets rendered to the same target path
    NameCollision { path: PathBuf, sources: Vec<String> },

    /// Orphaned managed file deleted
    OrphanDeleted { path: PathBuf },

    /// Pass stopped early; orphan detection skipped
    Cancelled,

    /// Pass completed
    Completed {
        added: usize,
        updated: usize,
        unchanged: usize,
        deleted: usize,
        errors: usize,
    },
}

/// Trait for receiving reconcile events
///
/// Implementations can be:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait ReconcileEventSink: Send + Sync {
    /// Handle a reconcile event
    fn on_event(&self, event: ReconcileEvent);

    /// Check if this sink wants per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ReconcileEventSink for NoopEventSink {
    fn on_event(&self, _event: ReconcileEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    pub(crate) struct RecordingEventSink {
        events: Arc<Mutex<Vec<ReconcileEvent>>>,
    }

    impl RecordingEventSink {
        pub(crate) fn new() -> (Self, Arc<Mutex<Vec<ReconcileEvent>>>) {
            let events = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    events: events.clone(),
                },
                events,
            )
        }
    }

    impl ReconcileEventSink for RecordingEventSink {
        fn on_event(&self, event: ReconcileEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let (sink, events) = RecordingEventSink::new();

        sink.on_event(ReconcileEvent::Started {
            directory: PathBuf::from("icons"),
            asset_count: 5,
            filtered_out: 0,
        });
        sink.on_event(ReconcileEvent::FileReconciled {
            path: PathBuf::from("icons/a.svg"),
            status: FileStatus::Added,
        });

        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn noop_sink_wants_no_details() {
        assert!(!NoopEventSink.wants_detailed_events());
    }
}
