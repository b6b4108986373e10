//! Configuration management for Garaji

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}

/// Delays for the simulated slow paths, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long the splash screen is shown before switching to home
    #[serde(default = "default_splash_ms")]
    pub splash_ms: u64,
    /// Simulated latency of access key generation
    #[serde(default = "default_key_generation_ms")]
    pub key_generation_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Booked duration starting from the current hour
    #[serde(default = "default_duration_hours")]
    pub duration_hours: u32,
    /// Flat fee added on top of the rental price
    #[serde(default = "default_service_fee")]
    pub service_fee: f64,
}

fn default_splash_ms() -> u64 {
    2500
}

fn default_key_generation_ms() -> u64 {
    1500
}

fn default_duration_hours() -> u32 {
    2
}

fn default_service_fee() -> f64 {
    1.50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            booking: BookingConfig::default(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            splash_ms: default_splash_ms(),
            key_generation_ms: default_key_generation_ms(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            duration_hours: default_duration_hours(),
            service_fee: default_service_fee(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when no file exists
    ///
    /// A file that exists but cannot be read or parsed is still an error;
    /// only a missing file is silently replaced with defaults.
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("GARAJI_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("garaji").join("config.toml"))
}
