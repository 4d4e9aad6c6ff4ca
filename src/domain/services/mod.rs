//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod asset_filter;
mod component;
mod name_transformer;
mod normalizer;
mod orphan_detector;
mod planner;

pub use asset_filter::{AssetFilter, FilterAction};
pub use component::{component_identifier, jsx_attribute_name, to_code_component};
pub use name_transformer::{
    sanitize, to_camel_case, to_kebab_case, to_pascal_case, transform, UNSAFE_FILENAME_CHARS,
};
pub use normalizer::{normalize, optimize, ContentError};
pub use orphan_detector::{base_name, is_managed, OrphanDetector};
pub use planner::{Collision, PlannedFile, Planner, ReconcilePlan};
