//! Validate command - check config and manifest without touching the directory

use std::path::Path;

use anyhow::{Context, Result};

use iconsync::config::Config;
use iconsync::domain::ports::AssetRepository;
use iconsync::domain::services::transform;
use iconsync::infrastructure::JsonManifestRepository;
use iconsync::presentation::detect_capabilities;
use iconsync::presentation::output::Icon;

use super::print_config_warnings;

/// Names previewed with their target base name
const SAMPLE_SIZE: usize = 5;

pub fn cmd_validate(assets: &Path, config_path: Option<&Path>, json: bool) -> Result<i32> {
    let (config, warnings) =
        Config::load_or_default(config_path).context("loading configuration")?;
    print_config_warnings(&warnings);
    let options = config.settings()?;

    let loaded = JsonManifestRepository::new(assets)
        .load_all()
        .with_context(|| format!("loading manifest {}", assets.display()))?;
    let total = loaded.len();
    let surviving = options.filter.apply(loaded);

    let sample: Vec<(String, String)> = surviving
        .iter()
        .take(SAMPLE_SIZE)
        .map(|asset| {
            (
                asset.original_name().to_string(),
                transform(asset.name(), &options.naming),
            )
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "validate",
                "total": total,
                "surviving": surviving.len(),
                "directory": options.directory.display().to_string(),
                "formats": options.kinds,
                "sample": sample
                    .iter()
                    .map(|(name, base)| serde_json::json!({"name": name, "base_name": base}))
                    .collect::<Vec<_>>(),
            })
        );
        return Ok(0);
    }

    let caps = detect_capabilities();
    println!(
        "{} Configuration and manifest are valid",
        Icon::Success.colored(caps.supports_color, caps.supports_unicode)
    );
    println!();
    println!("  Directory: {}", options.directory.display());
    println!("  {} of {} assets pass the filters", surviving.len(), total);
    if !sample.is_empty() {
        println!();
        for (name, base) in &sample {
            println!("    {} -> {}", name, base);
        }
    }

    Ok(0)
}
