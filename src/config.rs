//! Global unischedule configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

static DEFAULT_OUTPUT: &str = "schedule.ics";

const DEFAULT_PREVIEW_LIMIT: u16 = 52;

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_preview_limit() -> u16 {
    DEFAULT_PREVIEW_LIMIT
}

/// Configuration at ~/.config/unischedule/config.toml
///
/// Every key is optional; `UNISCHEDULE_<KEY>` environment variables override
/// the file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UnischeduleConfig {
    /// Default .ics path for `convert` when `-o` isn't given
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Occurrences listed per session by `preview`
    #[serde(default = "default_preview_limit")]
    pub preview_limit: u16,
}

impl Default for UnischeduleConfig {
    fn default() -> Self {
        UnischeduleConfig {
            output: default_output(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

impl UnischeduleConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("unischedule");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file means defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("UNISCHEDULE"))
            .build()
            .with_context(|| format!("Could not read config {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// The output path with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.output.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }
}
