//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - Birdeye: market data API client
//! - HTTP: reqwest-backed transport
//! - CLI: Command-line interface handlers

pub mod birdeye;
pub mod http;
pub mod cli;

pub use birdeye::{BirdeyeClient, BirdeyeConfig, BirdeyeError};
pub use http::ReqwestTransport;
pub use cli::CliApp;
