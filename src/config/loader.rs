//! Configuration Loader
//!
//! Builds `BirdeyeConfig` from the process environment or from a TOML file.
//! Secrets belong in the environment (or `.env`), not in the file.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::birdeye::{endpoints, BirdeyeConfig, DEFAULT_CHAIN};

/// Environment variable holding the Birdeye API key
pub const API_KEY_ENV: &str = "BIRD_EYE_TOKEN";
/// Optional base URL override
pub const BASE_URL_ENV: &str = "BIRDEYE_BASE_URL";
/// Optional chain override
pub const CHAIN_ENV: &str = "BIRDEYE_CHAIN";

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub birdeye: BirdeyeSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Birdeye API configuration section
#[derive(Clone, Deserialize, Default)]
pub struct BirdeyeSection {
    /// API host, defaults to the public API
    #[serde(default)]
    pub base_url: Option<String>,
    /// Chain sent as `x-chain`, defaults to solana
    #[serde(default)]
    pub chain: Option<String>,
    /// API key; empty or absent falls back to BIRD_EYE_TOKEN
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds, none by default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for BirdeyeSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BirdeyeSection")
            .field("base_url", &self.base_url)
            .field("chain", &self.chain)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl BirdeyeSection {
    /// Get API key with environment variable fallback
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        non_empty_env(API_KEY_ENV)
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Missing API key: set BIRD_EYE_TOKEN or birdeye.api_key")]
    MissingApiKey,
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.birdeye.base_url {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "base_url cannot be empty".to_string(),
                ));
            }
        }

        if let Some(ref chain) = self.birdeye.chain {
            if chain.trim().is_empty() {
                return Err(ConfigError::ValidationError(
                    "chain cannot be empty".to_string(),
                ));
            }
        }

        if self.birdeye.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the client configuration, pulling the key from the environment if needed
    pub fn birdeye_config(&self) -> Result<BirdeyeConfig, ConfigError> {
        let api_key = self.birdeye.get_api_key().ok_or(ConfigError::MissingApiKey)?;

        let mut config = BirdeyeConfig::new(api_key)
            .with_base_url(
                self.birdeye
                    .base_url
                    .clone()
                    .unwrap_or_else(|| endpoints::PUBLIC_API.to_string()),
            )
            .with_chain(
                self.birdeye
                    .chain
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHAIN.to_string()),
            );

        if let Some(secs) = self.birdeye.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

impl BirdeyeConfig {
    /// Build configuration from the environment
    ///
    /// `BIRD_EYE_TOKEN` is required; `BIRDEYE_BASE_URL` and `BIRDEYE_CHAIN`
    /// override the defaults when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = non_empty_env(API_KEY_ENV).ok_or(ConfigError::MissingApiKey)?;

        let mut config = BirdeyeConfig::new(api_key);
        if let Some(url) = non_empty_env(BASE_URL_ENV) {
            config = config.with_base_url(url);
        }
        if let Some(chain) = non_empty_env(CHAIN_ENV) {
            config = config.with_chain(chain);
        }

        Ok(config)
    }
}
