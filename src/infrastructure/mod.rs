//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, in-memory for tests)
//! - `events/` - Event sinks (NDJSON)
//! - `repositories/` - Asset manifest loading

pub mod events;
pub mod fs;
pub mod repositories;

pub use events::JsonEventSink;
pub use fs::LocalFs;
pub use repositories::JsonManifestRepository;
