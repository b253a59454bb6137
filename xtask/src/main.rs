//! Build helpers: `cargo xtask man` and `cargo xtask completions`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use cuesync::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for cuesync and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out } => generate_man(&out),
        Task::Completions { out } => generate_completions(&out),
    }
}

fn generate_man(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;

    let cmd = Cli::command();
    write_man_page(&cmd, "cuesync", out)?;

    for sub in cmd.get_subcommands() {
        let name = format!("cuesync-{}", sub.get_name());
        write_man_page(sub, &name, out)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_man_page(cmd: &clap::Command, name: &str, out: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;

    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {:?}", path))?;
    Ok(())
}

fn generate_completions(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {:?}", out))?;

    let mut cmd = Cli::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "cuesync", out)
            .with_context(|| format!("Failed to generate {} completions", shell))?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
