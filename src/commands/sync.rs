//! Sync command - run one reconciliation pass

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use iconsync::application::{CancelToken, ReconcileUseCase};
use iconsync::config::Config;
use iconsync::infrastructure::{JsonEventSink, JsonManifestRepository, LocalFs};

use super::{print_config_warnings, renderer};

pub fn cmd_sync(
    assets: &Path,
    config_path: Option<&Path>,
    dry_run: bool,
    json: bool,
    verbose: u8,
) -> Result<i32> {
    let (config, warnings) =
        Config::load_or_default(config_path).context("loading configuration")?;
    print_config_warnings(&warnings);

    let cancel = CancelToken::new();
    let handle = cancel.clone();
    ctrlc::set_handler(move || handle.cancel()).context("installing Ctrl-C handler")?;

    let options = config
        .settings()?
        .with_dry_run(dry_run)
        .with_cancel(cancel);
    let use_case = ReconcileUseCase::new(JsonManifestRepository::new(assets), LocalFs::new());

    let report = if json {
        use_case.execute_with_events(&options, Arc::new(JsonEventSink::stdout()))?
    } else {
        use_case.execute(&options)?
    };

    let rendered = renderer(json, verbose).render(&report, &options.directory, dry_run);
    if json {
        println!("{}", rendered);
    } else {
        print!("{}", rendered);
    }

    Ok(if report.is_success() { 0 } else { 1 })
}
