//! iconsync CLI
//!
//! Usage: iconsync <COMMAND>
//!
//! Commands:
//!   init      Write a commented default config file
//!   sync      Reconcile the output directory with an asset manifest
//!   validate  Validate the config and manifest

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = cli.config.as_deref();
    match cli.command {
        Commands::Init { force } => commands::init::cmd_init(config, force, cli.json),
        Commands::Sync { assets, dry_run } => {
            commands::sync::cmd_sync(&assets, config, dry_run, cli.json, cli.verbose)
        }
        Commands::Validate { assets } => commands::validate::cmd_validate(&assets, config, cli.json),
    }
}

/// Diagnostics go to stderr; `ICONSYNC_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("ICONSYNC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("iconsync={default_level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
