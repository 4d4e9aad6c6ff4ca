//! JSON Event Sink
//!
//! Outputs reconcile events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{ReconcileEvent, ReconcileEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Events arrive from worker threads
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ReconcileEventSink for JsonEventSink {
    fn on_event(&self, event: ReconcileEvent) {
        let json = match event {
            ReconcileEvent::Started {
                directory,
                asset_count,
                filtered_out,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "sync",
                    "directory": directory.display().to_string(),
                    "asset_count": asset_count,
                    "filtered_out": filtered_out,
                })
            }

            ReconcileEvent::Prepared { file_count } => {
                serde_json::json!({
                    "event": "prepared",
                    "command": "sync",
                    "file_count": file_count,
                })
            }

            ReconcileEvent::FileReconciled { path, status } => {
                serde_json::json!({
                    "event": "item",
                    "command": "sync",
                    "path": path.display().to_string(),
                    "status": status.as_str(),
                })
            }

            ReconcileEvent::AssetFailed { source, error } => {
                serde_json::json!({
                    "event": "item_error",
                    "command": "sync",
                    "source": source,
                    "error": error,
                })
            }

            ReconcileEvent::NameCollision { path, sources } => {
                serde_json::json!({
                    "event": "collision",
                    "command": "sync",
                    "path": path.display().to_string(),
                    "sources": sources,
                })
            }

            ReconcileEvent::OrphanDeleted { path } => {
                serde_json::json!({
                    "event": "orphan_deleted",
                    "command": "sync",
                    "path": path.display().to_string(),
                })
            }

            ReconcileEvent::Cancelled => {
                serde_json::json!({
                    "event": "cancelled",
                    "command": "sync",
                })
            }

            ReconcileEvent::Completed {
                added,
                updated,
                unchanged,
                deleted,
                errors,
            } => {
                let status = if errors == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": "sync",
                    "status": status,
                    "added": added,
                    "updated": updated,
                    "unchanged": unchanged,
                    "deleted": deleted,
                    "errors": errors,
                })
            }
        };

        self.write_event(json);
    }
}
