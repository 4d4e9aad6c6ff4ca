//! Domain Entities
//!
//! - `RawAsset` - an exported element before transformation
//! - `DesiredFile` - a rendered output file for one asset and output kind
//! - `DirectorySnapshot` - the output directory as seen before a batch

mod desired_file;
mod directory_snapshot;
mod raw_asset;

pub use desired_file::DesiredFile;
pub use directory_snapshot::{DirectorySnapshot, FileState};
pub use raw_asset::RawAsset;
