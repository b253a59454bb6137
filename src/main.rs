//! cuesync CLI entry point

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cuesync::cli::{Cli, Commands, ConfigCommands};
use cuesync::theme::stderr_theme;
use cuesync::Config;

fn main() {
    let cli = Cli::parse();

    // The config can switch on stage tracing, so it is read before logging starts
    let config = load_config(&cli);
    let trace_stages =
        cli.trace_stages || config.as_ref().map_or(false, |c| c.search.trace_stages);
    init_logging(cli.verbose, trace_stages);

    if let Err(err) = config.and_then(|config| run(cli, config, trace_stages)) {
        eprintln!("{}", stderr_theme().error_text(&format!("Error: {:#}", err)));
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8, trace_stages: bool) {
    let default_level = match verbose {
        0 if trace_stages => "warn,cuesync=debug",
        0 => "warn",
        1 => "cuesync=debug",
        _ => "cuesync=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(
        version = cuesync::VERSION,
        git_sha = cuesync::git_sha().unwrap_or("none"),
        "starting"
    );
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        // `config init --config new.toml` targets a file that does not exist yet
        Some(path) if !path.exists() && matches!(cli.command, Commands::Config(_)) => {
            Ok(Config::default())
        }
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run(cli: Cli, config: Config, trace_stages: bool) -> Result<()> {
    match cli.command {
        Commands::Play(args) => commands::play::handle(&args, &config, trace_stages),
        Commands::At(args) => commands::at::handle(&args, &config, trace_stages),
        Commands::Catalog(args) => commands::catalog::handle(&args, &config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
            ConfigCommands::Init { force } => {
                commands::config::handle_init(cli.config.as_deref(), force)
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "cuesync", &mut std::io::stdout());
            Ok(())
        }
    }
}
