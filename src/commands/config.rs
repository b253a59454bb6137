//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use cuesync::theme::current_theme;
use cuesync::Config;

fn target_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let theme = current_theme();
    println!("{}", theme.primary_text(config.to_toml()?.trim_end()));
    Ok(())
}

/// Print where the config file is (or would be) read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", target_path(explicit)?.display());
    Ok(())
}

/// Write a default config file, refusing to overwrite unless forced.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let theme = current_theme();
    let path = target_path(explicit)?;

    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = Config::default();
    let path = match explicit {
        Some(path) => {
            config.save_to(path)?;
            path.to_path_buf()
        }
        None => config.save()?,
    };
    println!(
        "{}",
        theme.primary_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
