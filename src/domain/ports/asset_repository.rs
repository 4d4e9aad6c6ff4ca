//! AssetRepository port - abstraction for loading raw assets
//!
//! Fetching and exporting from the design tool happens outside this crate.
//! Whatever produced the assets, the orchestrator only sees an ordered list.

use crate::domain::entities::RawAsset;
use crate::error::IconsyncResult;

/// Source of the raw assets for one reconciliation pass
pub trait AssetRepository {
    /// Load every raw asset, preserving the source order
    fn load_all(&self) -> IconsyncResult<Vec<RawAsset>>;
}
