//! Init command - write a commented default config file

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use iconsync::config::{DEFAULT_CONFIG_FILE, DEFAULT_CONFIG_TEMPLATE};
use iconsync::presentation::detect_capabilities;
use iconsync::presentation::output::Icon;

pub fn cmd_init(config_path: Option<&Path>, force: bool, json: bool) -> Result<i32> {
    let path = config_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    if path.exists() && !force {
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "event": "error",
                    "command": "init",
                    "kind": "already_exists",
                    "path": path.display().to_string(),
                })
            );
        }
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
        .with_context(|| format!("writing {}", path.display()))?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "init",
                "path": path.display().to_string(),
            })
        );
    } else {
        let caps = detect_capabilities();
        println!(
            "{} Created {}",
            Icon::Success.colored(caps.supports_color, caps.supports_unicode),
            path.display()
        );
        println!();
        println!("  Next: iconsync sync --assets <manifest.json>");
    }

    Ok(0)
}
