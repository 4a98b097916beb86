use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::client::DEFAULT_USER_AGENT;

/// Per-user defaults stored on disk.
///
/// The file is TOML at `<platform config dir>/config.toml`. Older JSON
/// configs at `$XDG_CONFIG_HOME/weather/config.json` are not read; move
/// their `user_agent` and `location` values over, or pass the new file
/// with `-c`.
///
/// Example TOML:
/// ```toml
/// user_agent = "Mozilla/5.0 ..."
/// location = "53226"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub user_agent: Option<String>,
    pub location: Option<String>,
}

impl Config {
    /// Load the config file.
    ///
    /// With no explicit path the platform default is used, and a missing
    /// file there just means "no config". An explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_file_path()?;
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("gov", "weather", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Values given for this run only, highest precedence.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `-u`
    pub user_agent: Option<String>,
    /// `-zip`
    pub location: Option<String>,
    /// Bare positional argument.
    pub positional: Option<String>,
}

/// Fully resolved inputs for one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub user_agent: String,
    pub location: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("No location provided")]
pub struct MissingLocation;

/// Resolve settings from most to least specific source.
///
/// User agent: flag, config file, `USER_AGENT` env, built-in default.
/// Location: flag, positional argument, config file; there is no default.
pub fn resolve_settings(
    overrides: Overrides,
    config: &Config,
    env_user_agent: Option<String>,
) -> Result<Settings, MissingLocation> {
    let user_agent = present(overrides.user_agent)
        .or_else(|| present(config.user_agent.clone()))
        .or_else(|| present(env_user_agent))
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    let location = present(overrides.location)
        .or_else(|| present(overrides.positional))
        .or_else(|| present(config.location.clone()))
        .ok_or(MissingLocation)?;

    Ok(Settings { user_agent, location })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
