//! Error types for iconsync
//!
//! Uses `thiserror` for library errors. Only batch-fatal conditions surface
//! as `IconsyncError`; per-asset failures are folded into the batch report.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for iconsync operations
pub type IconsyncResult<T> = Result<T, IconsyncError>;

/// Main error type for iconsync operations
#[derive(Error, Debug)]
pub enum IconsyncError {
    /// The output directory could not be created, so no write can proceed
    #[error("cannot create output directory {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be listed for the batch snapshot
    #[error("cannot read output directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Include or exclude filter is not a valid regular expression
    #[error("invalid {field} pattern '{pattern}': {source}")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Asset manifest could not be decoded
    #[error("invalid asset manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// The bounded worker pool could not be started
    #[error("cannot start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),

    /// No output kinds are enabled
    #[error("no output formats enabled; set output.formats in the config")]
    NoOutputKinds,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
