use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

pub mod defaults;
pub mod duration_serde;

use defaults::*;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub imaging: ImagingConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for paths that match no route
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagingConfig {
    /// Largest accepted width or height; anything above is answered with 403
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Maximum number of entries returned by each stats listing
    #[serde(default = "default_top_limit")]
    pub top_limit: usize,
    /// Windows reported by `/stats/hits`, shortest first
    #[serde(default = "default_hit_windows", with = "duration_serde::duration_list")]
    pub hit_windows: Vec<Duration>,
    /// Drop hits older than this; unset keeps every hit until reset
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "duration_serde::option_duration"
    )]
    pub hit_retention: Option<Duration>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STATIC_DIR)
}

fn default_max_dimension() -> u32 {
    DEFAULT_MAX_DIMENSION
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_hit_windows() -> Vec<Duration> {
    DEFAULT_HIT_WINDOWS
        .iter()
        .filter_map(|window| humantime::parse_duration(window).ok())
        .collect()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for ImagingConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_limit: default_top_limit(),
            hit_windows: default_hit_windows(),
            hit_retention: None,
        }
    }
}

impl Config {
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        let config = if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            toml::from_str(&contents)?
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            default_config
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply the `PORT` environment variable, if set
    pub fn apply_env_overrides(&mut self) {
        if let Ok(port) = std::env::var(PORT_ENV_VAR) {
            match port.parse() {
                Ok(port) => self.web.port = port,
                Err(_) => warn!("Ignoring invalid {} value: '{}'", PORT_ENV_VAR, port),
            }
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.imaging.max_dimension == 0 {
            return Err(AppError::configuration("imaging.max_dimension must be at least 1"));
        }
        if self.stats.top_limit == 0 {
            return Err(AppError::configuration("stats.top_limit must be at least 1"));
        }
        if self.stats.hit_windows.is_empty() {
            return Err(AppError::configuration("stats.hit_windows must not be empty"));
        }
        if self.stats.hit_windows.iter().any(Duration::is_zero) {
            return Err(AppError::configuration("stats.hit_windows must be non-zero"));
        }
        if let Some(retention) = self.stats.hit_retention {
            let longest = self.stats.hit_windows.iter().max().copied().unwrap_or_default();
            if retention < longest {
                return Err(AppError::configuration(format!(
                    "stats.hit_retention ({}) must cover the longest hit window ({})",
                    humantime::format_duration(retention),
                    humantime::format_duration(longest)
                )));
            }
        }
        Ok(())
    }
}
