//! Birdeye Adapter
//!
//! Market data client for the Birdeye public API:
//! - `fetch_prices`: current price for a batch of token addresses
//! - `fetch_token_overview`: market overview for one token
//!
//! All requests carry the `accept`, `x-chain` and `X-API-KEY` headers.
//!
//! # Example
//!
//! ```rust,ignore
//! use birdeye_client::adapters::birdeye::{BirdeyeClient, BirdeyeConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BirdeyeClient::new(BirdeyeConfig::from_env()?)?;
//!
//!     let prices = client.fetch_prices(&["So11111111111111111111111111111111111111112"]).await?;
//!     for (address, info) in &prices {
//!         println!("{}: {}", address, info.price);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub(crate) mod types;

pub use client::BirdeyeClient;
pub use config::{endpoints, BirdeyeConfig, DEFAULT_CHAIN};
pub use error::{BirdeyeError, Endpoint, ResponseFault};

#[cfg(test)]
mod contract_tests;
