//! Birdeye Client Library
//!
//! A thin client for the Birdeye market data API on Solana: batch token
//! prices and single-token market overviews.
//!
//! # Modules
//!
//! - `domain`: Result records (PriceInfo, TokenOverview)
//! - `ports`: Transport trait abstraction (HttpTransport) and mocks
//! - `adapters`: External implementations (Birdeye client, reqwest transport, CLI)
//! - `config`: Configuration loading from the environment or TOML

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;

pub use adapters::birdeye::{BirdeyeClient, BirdeyeConfig, BirdeyeError, Endpoint, ResponseFault};
pub use domain::{PriceInfo, TokenOverview};
pub use ports::{HttpMethod, HttpTransport, TransportError};
