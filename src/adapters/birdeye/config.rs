//! Birdeye Configuration
//!
//! Connection settings for the Birdeye public API.

use std::fmt;
use std::time::Duration;

/// Birdeye API endpoints
pub mod endpoints {
    /// Public API host
    pub const PUBLIC_API: &str = "https://public-api.birdeye.so";
    /// Single token price
    pub const PRICE_PATH: &str = "/public/price";
    /// Token market overview
    pub const TOKEN_OVERVIEW_PATH: &str = "/defi/token_overview";
}

/// Chain sent in the `x-chain` header when none is configured
pub const DEFAULT_CHAIN: &str = "solana";

/// Birdeye client configuration
#[derive(Clone, PartialEq)]
pub struct BirdeyeConfig {
    /// API key sent as `X-API-KEY`
    pub api_key: String,
    /// Base URL of the API host, without trailing slash
    pub base_url: String,
    /// Chain identifier sent as `x-chain`
    pub chain: String,
    /// Overall request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl BirdeyeConfig {
    /// Create config for the public API with the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: endpoints::PUBLIC_API.to_string(),
            chain: DEFAULT_CHAIN.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = chain.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn price_url(&self) -> String {
        format!("{}{}", self.base_url, endpoints::PRICE_PATH)
    }

    pub fn token_overview_url(&self) -> String {
        format!("{}{}", self.base_url, endpoints::TOKEN_OVERVIEW_PATH)
    }
}

// Keep the key out of logs and panic messages
impl fmt::Debug for BirdeyeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BirdeyeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("chain", &self.chain)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_defaults() {
        let config = BirdeyeConfig::new("key");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "https://public-api.birdeye.so");
        assert_eq!(config.chain, "solana");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_endpoint_urls() {
        let config = BirdeyeConfig::new("key");
        assert_eq!(config.price_url(), "https://public-api.birdeye.so/public/price");
        assert_eq!(
            config.token_overview_url(),
            "https://public-api.birdeye.so/defi/token_overview"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = BirdeyeConfig::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.price_url(), "http://localhost:8080/public/price");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = BirdeyeConfig::new("super-secret");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
