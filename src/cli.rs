//! Command-line interface definition.
//!
//! Lives in the library so the `xtask` crate can render man pages and
//! completions from the same definition the binary parses.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::clock::parse_time_arg;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("CUESYNC_BUILD_DATE"),
    ")"
);

/// Keep timed overlay annotations in step with a playback clock
#[derive(Debug, Parser)]
#[command(name = "cuesync", version, long_version = LONG_VERSION)]
#[command(about = "Keep timed overlay annotations in step with a playback clock")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log every step of the annotation search
    #[arg(long, global = true)]
    pub trace_stages: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the timeline on a simulated clock, printing show/hide events
    Play(PlayArgs),

    /// Query a single time and print what to show or hide
    At(AtArgs),

    /// Print the tracks and time bounds of a catalog
    Catalog(CatalogCommandArgs),

    /// Manage the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where to read the timeline from.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogSource {
    /// Catalog file (.json or .toml); defaults to the configured or built-in timeline
    #[arg(short, long = "catalog", value_name = "FILE")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub source: CatalogSource,

    /// Milliseconds between clock ticks
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Media seconds advanced per tick
    #[arg(long, value_name = "SECONDS")]
    pub step: Option<f64>,

    /// Media time to start from
    #[arg(long, value_name = "TIME", value_parser = parse_time_arg)]
    pub start: Option<f64>,

    /// Stop once the clock reaches this media time
    #[arg(long, value_name = "TIME", value_parser = parse_time_arg)]
    pub until: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct AtArgs {
    /// Playback time in seconds (also accepts currentTime=<seconds>)
    #[arg(value_name = "TIME", value_parser = parse_time_arg)]
    pub time: f64,

    #[command(flatten)]
    pub source: CatalogSource,

    /// Print the transition as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct CatalogCommandArgs {
    #[command(flatten)]
    pub source: CatalogSource,

    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
