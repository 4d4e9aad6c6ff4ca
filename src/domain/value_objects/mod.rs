//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod component;
mod file_status;
mod naming;
mod optimization;
mod output_kind;

pub use component::{ComponentPolicy, ExportStyle};
pub use file_status::FileStatus;
pub use naming::{NameTransform, NamingPolicy};
pub use optimization::{OptimizationPolicy, OptimizePlugin};
pub use output_kind::{is_managed_extension, OutputKind, MANAGED_EXTENSIONS};
