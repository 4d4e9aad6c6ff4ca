use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// iconsync - reconcile exported design-tool icons with a local directory
#[derive(Parser, Debug)]
#[command(name = "iconsync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./iconsync.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a commented default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Reconcile the output directory with an asset manifest
    Sync {
        /// JSON asset manifest, or '-' for stdin
        #[arg(short, long)]
        assets: PathBuf,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate the config and manifest without touching the output directory
    Validate {
        /// JSON asset manifest, or '-' for stdin
        #[arg(short, long)]
        assets: PathBuf,
    },
}
