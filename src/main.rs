//! birdeye-client - Birdeye market data from the command line
//!
//! Fetches token prices and token overviews for Solana tokens.

use anyhow::Result;
use clap::Parser;

use birdeye_client::adapters::cli::{self, CliApp};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (BIRD_EYE_TOKEN goes here)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    cli::execute(app).await
}
