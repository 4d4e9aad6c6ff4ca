//! iconsync - reconcile exported design-tool icons with a local asset directory
//!
//! Given a list of named raw vector graphics, iconsync transforms each name,
//! optionally optimizes the markup or wraps it in a code component, and
//! brings an output directory in line with the batch: new files are added,
//! changed files updated, identical files left untouched and managed files
//! that no longer correspond to an asset deleted.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AssetFailure, BatchReport, CancelToken, ReconcileOptions, ReconcileUseCase};
pub use config::Config;
pub use domain::entities::RawAsset;
pub use domain::value_objects::{NameTransform, NamingPolicy, OutputKind};
pub use error::{IconsyncError, IconsyncResult};
pub use infrastructure::{JsonEventSink, JsonManifestRepository, LocalFs};
