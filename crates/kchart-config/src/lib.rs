//! Configuration management for kchart.
//!
//! Loads chart defaults and indicator parameters from TOML files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use kchart_indicators::{KdjConfig, MacdConfig};

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub chart: ChartSettings,
    pub indicators: IndicatorSettings,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./kchart.toml`
    /// 2. `~/.config/kchart/kchart.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("kchart.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("kchart").join("kchart.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("kchart.toml")
    }
}

/// Which moving-average lines the primary pane carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaSet {
    /// MA5/10/20 only.
    Basic,
    /// MA5/10/20 plus MA30/60.
    #[default]
    Full,
}

/// Chart display defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    /// Primary pane height in pixels.
    pub height: u32,
    /// Oscillator sub-pane height in pixels.
    pub sub_pane_height: u32,
    /// Which moving-average lines to show on the primary pane.
    pub ma_set: MaSet,
    /// Show the KDJ sub-pane.
    pub show_kdj: bool,
    /// Show the MACD sub-pane.
    pub show_macd: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            height: 380,
            sub_pane_height: 140,
            ma_set: MaSet::Full,
            show_kdj: true,
            show_macd: true,
        }
    }
}

/// Indicator parameter defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub kdj: KdjParams,
    pub macd: MacdParams,
}

/// KDJ parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KdjParams {
    pub n: usize,
    pub m1: usize,
    pub m2: usize,
}

impl Default for KdjParams {
    fn default() -> Self {
        let config = KdjConfig::default();
        Self {
            n: config.n,
            m1: config.m1,
            m2: config.m2,
        }
    }
}

impl From<&KdjParams> for KdjConfig {
    fn from(params: &KdjParams) -> Self {
        Self {
            n: params.n,
            m1: params.m1,
            m2: params.m2,
        }
    }
}

/// MACD parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MacdParams {
    pub fast: usize,
    pub slow: usize,
    pub signal: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        let config = MacdConfig::default();
        Self {
            fast: config.fast_period,
            slow: config.slow_period,
            signal: config.signal_period,
        }
    }
}

impl From<&MacdParams> for MacdConfig {
    fn from(params: &MacdParams) -> Self {
        Self {
            fast_period: params.fast,
            slow_period: params.slow,
            signal_period: params.signal,
        }
    }
}
