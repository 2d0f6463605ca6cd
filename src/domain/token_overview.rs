//! Token Overview
//!
//! Point-in-time snapshot of a token's market metadata as reported by Birdeye.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market overview for a single token
///
/// Every field is required. A response missing any of them never produces
/// a partially filled overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenOverview {
    /// Token mint address
    pub address: String,
    /// Number of decimal places
    pub decimals: u8,
    /// Liquidity in USD
    pub liquidity: f64,
    /// Token logo URI
    pub logo_uri: String,
    /// Market capitalisation in USD
    pub market_cap: f64,
    /// Token symbol
    pub symbol: String,
    /// 24-hour price change percentage
    pub change_24h_percent: f64,
    /// 24-hour trading volume in USD
    pub volume_24h_usd: f64,
    /// Token name
    pub name: String,
    /// Unix time (seconds) of the last trade
    pub last_trade_unix_time: i64,
}

impl TokenOverview {
    /// Last trade time as a UTC timestamp, `None` if out of range
    pub fn last_trade_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_trade_unix_time, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenOverview {
        TokenOverview {
            address: "So11111111111111111111111111111111111111112".to_string(),
            decimals: 9,
            liquidity: 1_250_000.5,
            logo_uri: "https://example.com/sol.png".to_string(),
            market_cap: 70_000_000_000.0,
            symbol: "SOL".to_string(),
            change_24h_percent: -2.5,
            volume_24h_usd: 980_000_000.0,
            name: "Wrapped SOL".to_string(),
            last_trade_unix_time: 1_700_000_000,
        }
    }

    #[test]
    fn test_last_trade_at() {
        let overview = sample();
        let ts = overview.last_trade_at().unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
        assert_eq!(ts.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_last_trade_at_out_of_range() {
        let mut overview = sample();
        overview.last_trade_unix_time = i64::MAX;
        assert!(overview.last_trade_at().is_none());
    }

    #[test]
    fn test_overview_serialization() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"symbol\":\"SOL\""));
        assert!(json.contains("\"logo_uri\""));

        let restored: TokenOverview = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, sample());
    }
}
