//! Birdeye wire types
//!
//! Response bodies as the API returns them. Every field is required, so a
//! missing or mistyped key fails deserialization as a whole.

use serde::Deserialize;

use crate::domain::{PriceInfo, TokenOverview};

/// Body of `GET /public/price`
#[derive(Debug, Clone, Deserialize)]
pub struct PriceResponse {
    pub value: f64,
}

impl From<PriceResponse> for PriceInfo {
    fn from(r: PriceResponse) -> Self {
        PriceInfo::new(r.value)
    }
}

/// Body of `GET /defi/token_overview`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenOverviewResponse {
    pub address: String,
    pub decimals: u8,
    pub liquidity: f64,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
    #[serde(rename = "mc")]
    pub market_cap: f64,
    pub symbol: String,
    #[serde(rename = "v24hChangePercent")]
    pub change_24h_percent: f64,
    #[serde(rename = "v24hUSD")]
    pub volume_24h_usd: f64,
    pub name: String,
    #[serde(rename = "lastTradeUnixTime")]
    pub last_trade_unix_time: i64,
}

impl From<TokenOverviewResponse> for TokenOverview {
    fn from(r: TokenOverviewResponse) -> Self {
        TokenOverview {
            address: r.address,
            decimals: r.decimals,
            liquidity: r.liquidity,
            logo_uri: r.logo_uri,
            market_cap: r.market_cap,
            symbol: r.symbol,
            change_24h_percent: r.change_24h_percent,
            volume_24h_usd: r.volume_24h_usd,
            name: r.name,
            last_trade_unix_time: r.last_trade_unix_time,
        }
    }
}
