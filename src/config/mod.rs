//! Configuration module for iconsync
//!
//! Configuration sources, highest priority first:
//! 1. CLI flags
//! 2. Environment variables (ICONSYNC_*)
//! 3. Config file (`iconsync.toml` or `--config`)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{ConfigWarning, DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};
pub use types::{Config, FilterConfig, OutputConfig, SyncConfig};
