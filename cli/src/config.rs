// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use cadence_core::{APP_NAME, Config as CoreConfig};

use crate::util::OutputFormat;

const CADENCE_CONFIG_ENV: &str = "CADENCE_CONFIG";

/// Resolve and load the configuration.
///
/// The path is taken from the `--config` flag, then the `CADENCE_CONFIG`
/// environment variable, then the user config directory. Only the last one
/// may be missing, in which case the defaults are used.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CADENCE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = match get_config_dir() {
            Ok(dir) => dir.join(format!("{APP_NAME}/config.toml")),
            Err(e) => {
                tracing::debug!(err = %e, "no config directory, using defaults");
                return Ok((CoreConfig::default(), Config::default()));
            }
        };
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok((CoreConfig::default(), Config::default()));
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;

    let mut core = raw.core;
    core.normalize()?;
    Ok((core, raw.cli))
}

/// Configuration for the command line interface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format used when `--output-format` is not given.
    pub output_format: OutputFormat,
}

impl Config {
    /// The output format to use, preferring the one given on the command line.
    pub fn output_format(&self, arg: Option<OutputFormat>) -> OutputFormat {
        arg.unwrap_or(self.output_format)
    }
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigRaw {
    core: CoreConfig,
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
