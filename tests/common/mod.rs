//! Common test utilities for iconsync CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated working directory plus helpers to run the binary
//! - Fixtures: reusable graphic markup and manifests

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
