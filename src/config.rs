//! Configuration file handling.
//!
//! The config lives at `$CUESYNC_CONFIG` if set, otherwise at
//! `<config_dir>/cuesync/config.toml`. Every field has a default, so a
//! missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CUESYNC_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub search: SearchConfig,
    pub catalog: CatalogConfig,
}

/// Simulated clock settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Wall-clock milliseconds between ticks
    pub tick_interval_ms: u64,
    /// Media seconds advanced per tick
    pub step_seconds: f64,
    /// Media time the clock starts from
    pub start_time: f64,
    /// Stop once the clock reaches this media time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_after: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            step_seconds: 0.25,
            start_time: 0.0,
            stop_after: None,
        }
    }
}

impl PlaybackConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Search diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Log every search stage at debug level
    pub trace_stages: bool,
}

/// Where the timeline comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file (.json or .toml); the built-in demo timeline when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("cuesync").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load and validate a specific config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config: {:?}", path))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let step = self.playback.step_seconds;
        ensure!(
            step.is_finite() && step > 0.0,
            "playback.step_seconds must be a positive number (got {})",
            step
        );
        ensure!(
            self.playback.start_time.is_finite() && self.playback.start_time >= 0.0,
            "playback.start_time must be a non-negative number (got {})",
            self.playback.start_time
        );
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Save to the default location, creating the directory if needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config: {:?}", path))?;
        Ok(())
    }
}
