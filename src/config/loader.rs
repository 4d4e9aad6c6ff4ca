//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::OutputKind;
use crate::error::{IconsyncError, IconsyncResult};

use super::types::Config;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "iconsync.toml";

/// Commented config written by `iconsync init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# iconsync configuration

[output]
# Directory that holds the generated files. Managed files (.svg, .tsx, .jsx)
# in it that no longer correspond to an asset are deleted on sync.
directory = "icons"
# Output formats: "svg", "react"
formats = ["svg"]

[naming]
# preserve | kebab-case | camelCase | PascalCase
transform = "kebab-case"
# Replace < > : " / \ | ? * with '-'
sanitize = true

[optimize]
enabled = false
# Omit to run every plugin; [] re-serializes only.
# plugins = ["remove-comments", "remove-metadata"]

[react]
typescript = true
# named | default
export_type = "named"
# component_prefix = "Icon"

[filter]
# Regular expressions matched against the original asset name.
# include = "^icons/"
# exclude = "deprecated"

[sync]
# Worker threads; 0 uses every available core
jobs = 0
"#;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> IconsyncResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse configuration text; `path` is only used for diagnostics
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> IconsyncResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| IconsyncError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load an explicit config, the default file if present, or defaults
pub fn load_or_default(explicit: Option<&Path>) -> IconsyncResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                load_with_warnings(path)?
            } else {
                tracing::debug!("no {DEFAULT_CONFIG_FILE}; using defaults");
                (Config::default(), Vec::new())
            }
        }
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (ICONSYNC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // ICONSYNC_OUTPUT_DIR
    if let Some(dir) = lookup("ICONSYNC_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
        config.output.directory = PathBuf::from(dir);
    }

    // ICONSYNC_FORMATS (comma-separated)
    if let Some(formats) = lookup("ICONSYNC_FORMATS") {
        let parsed: Vec<OutputKind> = formats
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| {
                let kind = OutputKind::from_name(s);
                if kind.is_none() {
                    tracing::warn!(format = s.trim(), "ignoring unknown format in ICONSYNC_FORMATS");
                }
                kind
            })
            .collect();
        if !parsed.is_empty() {
            config.output.formats = parsed;
        }
    }

    // ICONSYNC_JOBS
    if let Some(jobs) = lookup("ICONSYNC_JOBS") {
        match jobs.trim().parse::<usize>() {
            Ok(jobs) => config.sync.jobs = jobs,
            Err(_) => tracing::warn!(value = %jobs, "ignoring invalid ICONSYNC_JOBS"),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "directory",
        "formats",
        "naming",
        "transform",
        "sanitize",
        "optimize",
        "enabled",
        "plugins",
        "react",
        "typescript",
        "export_type",
        "component_prefix",
        "filter",
        "include",
        "exclude",
        "sync",
        "jobs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
