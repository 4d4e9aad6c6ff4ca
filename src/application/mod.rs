//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReconcileUseCase` - Filter, render, reconcile, report

pub mod reconcile;

pub use reconcile::{
    AssetFailure, BatchReport, CancelToken, DirectoryReconciler, ReconcileOptions,
    ReconcileOutcome, ReconcileUseCase,
};
