//! Presentation Layer
//!
//! This layer handles:
//! - Terminal capability detection
//! - Output formatting (text/JSON)

pub mod output;
pub mod terminal;

pub use output::{create_renderer, JsonRenderer, OutputFormat, ReportRenderer, TextRenderer};
pub use terminal::{detect_capabilities, TerminalCapabilities};
