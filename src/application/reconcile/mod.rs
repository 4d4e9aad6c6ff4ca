//! Reconcile Module
//!
//! Orchestrates a reconciliation pass for iconsync.
//!
//! ## Structure
//!
//! - `options` - Typed pass settings (`ReconcileOptions`)
//! - `result` - Result types (`BatchReport`, `AssetFailure`)
//! - `reconciler` - Directory reconciliation (`DirectoryReconciler`)
//! - `use_case` - Core use case logic (`ReconcileUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use iconsync::application::reconcile::{ReconcileOptions, ReconcileUseCase};
//!
//! let use_case = ReconcileUseCase::new(manifest_repo, LocalFs::new());
//! let report = use_case.execute(&ReconcileOptions::new("src/icons"))?;
//! ```

mod cancel;
mod options;
mod reconciler;
mod result;
mod use_case;

pub use cancel::CancelToken;
pub use options::ReconcileOptions;
pub use reconciler::{DirectoryReconciler, ReconcileOutcome};
pub use result::{AssetFailure, BatchReport};
pub use use_case::ReconcileUseCase;
