//! Configuration for Matcache.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::MatcacheResult;

/// Main configuration for Matcache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Inversion settings, forwarded untouched to the inversion primitive.
    #[serde(default)]
    pub invert: InvertConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Settings for the inversion primitive.
///
/// The cache layer never interprets these; they travel verbatim from the
/// caller of [`cache_solve`](crate::cache_solve) down to
/// [`invert`](crate::invert).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvertConfig {
    /// Reject matrices containing NaN or infinite entries before inverting.
    #[serde(default = "default_true")]
    pub check_finite: bool,

    /// Reject matrices whose |determinant| is at or below this threshold.
    ///
    /// The default of 0.0 disables the check and leaves singularity
    /// detection entirely to LAPACK.
    #[serde(default)]
    pub singular_epsilon: f64,
}

impl Default for InvertConfig {
    fn default() -> Self {
        Self {
            check_finite: true,
            singular_epsilon: 0.0,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> MatcacheResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> MatcacheResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            invert: InvertConfig::default(),
        }
    }

    /// Tries to load configuration from current directory or uses default.
    pub fn load_or_default() -> Self {
        Self::load("matcache.toml").unwrap_or_else(|_| Self::default_config())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
