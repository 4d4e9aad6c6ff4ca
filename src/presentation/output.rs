//! Output Rendering
//!
//! Renders batch reports as human-readable text or JSON.

use std::fmt::Write;
use std::path::Path;

use crossterm::style::{Color, Stylize};

use crate::application::BatchReport;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Status icons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Added,
    Updated,
    Unchanged,
    Deleted,
}

impl Icon {
    pub fn render(&self, unicode: bool) -> &'static str {
        match (unicode, self) {
            (true, Icon::Success) => "✓",
            (true, Icon::Error) => "✗",
            (true, Icon::Warning) => "⚠",
            (true, Icon::Added) => "+",
            (true, Icon::Updated) => "→",
            (true, Icon::Unchanged) => "○",
            (true, Icon::Deleted) => "🗑",
            (false, Icon::Success) => "[OK]",
            (false, Icon::Error) => "[FAIL]",
            (false, Icon::Warning) => "[!]",
            (false, Icon::Added) => "+",
            (false, Icon::Updated) => "->",
            (false, Icon::Unchanged) => "[ ]",
            (false, Icon::Deleted) => "[DEL]",
        }
    }

    pub fn colored(&self, color: bool, unicode: bool) -> String {
        let s = self.render(unicode);
        if !color {
            return s.to_string();
        }
        let tint = match self {
            Icon::Success | Icon::Added => Color::Green,
            Icon::Error => Color::Red,
            Icon::Warning | Icon::Deleted => Color::Yellow,
            Icon::Updated => Color::Cyan,
            Icon::Unchanged => Color::DarkGrey,
        };
        format!("{}", s.with(tint))
    }
}

/// Trait for rendering batch reports
pub trait ReportRenderer {
    /// Render the report for `directory`
    fn render(&self, report: &BatchReport, directory: &Path, dry_run: bool) -> String;
}

/// Text renderer for batch reports
pub struct TextRenderer {
    /// Whether to use colors
    pub color: bool,
    /// Whether to use unicode
    pub unicode: bool,
    /// Verbosity level
    pub verbose: u8,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
            verbose: 0,
        }
    }
}

impl TextRenderer {
    fn section(&self, out: &mut String, title: &str, icon: Icon, paths: &[std::path::PathBuf]) {
        if paths.is_empty() {
            return;
        }
        let _ = writeln!(out, "  {} ({}):", title, paths.len());
        for path in paths {
            let _ = writeln!(
                out,
                "    {} {}",
                icon.colored(self.color, self.unicode),
                path.display()
            );
        }
    }
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &BatchReport, directory: &Path, dry_run: bool) -> String {
        let mut out = String::new();
        let ok = Icon::Success.colored(self.color, self.unicode);
        let fail = Icon::Error.colored(self.color, self.unicode);
        let warn = Icon::Warning.colored(self.color, self.unicode);

        if report.is_success() && !report.has_changes() {
            let _ = writeln!(out, "{} Already up-to-date", ok);
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}", report.summary());
            return out;
        }

        let title = match (report.cancelled, report.is_success(), dry_run) {
            (true, _, _) => format!("{} Sync cancelled", warn),
            (false, true, true) => format!("{} Dry run complete (no files changed)", ok),
            (false, true, false) => format!("{} Sync complete", ok),
            (false, false, _) => format!("{} Sync finished with errors", fail),
        };
        let _ = writeln!(out, "{}", title);
        let _ = writeln!(out);
        let _ = writeln!(out, "  Directory: {}", directory.display());
        let _ = writeln!(out, "  {}", report.summary());
        let _ = writeln!(out);

        self.section(&mut out, "Added", Icon::Added, &report.added);
        self.section(&mut out, "Updated", Icon::Updated, &report.updated);
        if self.verbose > 0 {
            self.section(&mut out, "Unchanged", Icon::Unchanged, &report.unchanged);
        }
        self.section(&mut out, "Deleted", Icon::Deleted, &report.deleted);

        if !report.collisions.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  Name collisions ({}):", report.collisions.len());
            for path in &report.collisions {
                let _ = writeln!(out, "    {} {} (last asset wins)", warn, path.display());
            }
        }

        if !report.errors.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "  Errors ({}):", report.errors.len());
            for failure in &report.errors {
                let _ = writeln!(out, "    {} {}: {}", fail, failure.source, failure.error);
            }
        }

        out
    }
}

/// JSON renderer for batch reports
///
/// Emits a single NDJSON line so it can follow the event stream.
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &BatchReport, directory: &Path, dry_run: bool) -> String {
        let json = serde_json::json!({
            "event": "report",
            "success": report.is_success(),
            "directory": directory.display().to_string(),
            "dry_run": dry_run,
            "report": report,
        });

        serde_json::to_string(&json).unwrap_or_default()
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    color: bool,
    unicode: bool,
    verbose: u8,
) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer {
            color,
            unicode,
            verbose,
        }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
