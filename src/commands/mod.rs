//! Command handlers for the CLI binary

pub mod init;
pub mod sync;
pub mod validate;

use iconsync::config::ConfigWarning;
use iconsync::presentation::output::Icon;
use iconsync::presentation::{create_renderer, detect_capabilities, OutputFormat, ReportRenderer};

/// Print unknown-key warnings to stderr
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    let caps = detect_capabilities();
    for warning in warnings {
        let icon = Icon::Warning.colored(caps.supports_color, caps.supports_unicode);
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "{} {}: unknown config key '{}' (did you mean '{}'?)",
                icon, location, warning.key, suggestion
            ),
            None => eprintln!("{} {}: unknown config key '{}'", icon, location, warning.key),
        }
    }
}

/// Renderer for the current output mode
pub fn renderer(json: bool, verbose: u8) -> Box<dyn ReportRenderer> {
    let caps = detect_capabilities();
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    create_renderer(format, caps.supports_color, caps.supports_unicode, verbose)
}
