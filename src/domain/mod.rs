//! Domain Layer
//!
//! The core of iconsync - pure reconciliation logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (RawAsset, DesiredFile, DirectorySnapshot)
//! - `value_objects/` - Immutable value types (OutputKind, NamingPolicy, FileStatus)
//! - `services/` - Domain services (name transformer, normalizer, Planner, OrphanDetector)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
