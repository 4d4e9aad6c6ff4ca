//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_repository;
pub mod file_system;
pub mod reconcile_events;

pub use asset_repository::AssetRepository;
pub use file_system::{DirEntry, FileSystem, FsError, FsResult};
pub use reconcile_events::{NoopEventSink, ReconcileEvent, ReconcileEventSink};
