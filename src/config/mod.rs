//! Configuration Module
//!
//! Loads client configuration from the environment or a TOML file.

pub mod loader;

pub use loader::{
    Config, ConfigError, load_config, API_KEY_ENV,
};
