//! CLI Command Handlers
//!
//! Implementation of the `prices` and `overview` commands.

use clap::{Parser, Subcommand};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::adapters::birdeye::{BirdeyeClient, BirdeyeConfig};
use crate::config::load_config;
use crate::domain::{PriceInfo, TokenOverview};

/// Birdeye market data client for Solana tokens
#[derive(Parser, Debug)]
#[command(
    name = "birdeye-client",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Birdeye market data client for Solana tokens",
    long_about = "Fetches current token prices and token market overviews from the \
                  Birdeye public API. The API key is read from BIRD_EYE_TOKEN."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (defaults to environment only)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch current prices for one or more tokens
    Prices(PricesCmd),

    /// Fetch the market overview of a token
    Overview(OverviewCmd),
}

/// Fetch prices
#[derive(Parser, Debug)]
pub struct PricesCmd {
    /// Token mint addresses
    #[arg(value_name = "ADDRESS", required = true)]
    pub addresses: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch token overview
#[derive(Parser, Debug)]
pub struct OverviewCmd {
    /// Token mint address
    #[arg(value_name = "ADDRESS")]
    pub address: String,

    /// Print result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the CLI command
pub async fn execute(app: CliApp) -> Result<()> {
    let (client_config, config_level) = match app.config {
        Some(ref path) => {
            let path = shellexpand::tilde(&path.to_string_lossy()).to_string();
            let config = load_config(&path)
                .with_context(|| format!("Failed to load configuration from {}", path))?;
            let client_config = config
                .birdeye_config()
                .context("Failed to resolve Birdeye configuration")?;
            (client_config, Some(config.logging.level))
        }
        None => (
            BirdeyeConfig::from_env().context("Failed to load configuration from environment")?,
            None,
        ),
    };

    init_logging(&log_level(app.verbose, app.debug, config_level.as_deref()))?;
    tracing::info!(base_url = %client_config.base_url, chain = %client_config.chain, "Birdeye client configured");

    let client = BirdeyeClient::new(client_config).context("Failed to create Birdeye client")?;

    match app.command {
        Command::Prices(cmd) => prices_command(&client, cmd).await,
        Command::Overview(cmd) => overview_command(&client, cmd).await,
    }
}

/// Flags win over the config file; warn when neither is given
fn log_level(verbose: bool, debug: bool, configured: Option<&str>) -> String {
    if debug {
        "debug".to_string()
    } else if verbose {
        "info".to_string()
    } else {
        configured.unwrap_or("warn").to_string()
    }
}

/// Initialize logging system
fn init_logging(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Handle prices command
async fn prices_command(client: &BirdeyeClient, cmd: PricesCmd) -> Result<()> {
    tracing::info!("Fetching prices for {} token(s)", cmd.addresses.len());

    let prices = client
        .fetch_prices(&cmd.addresses)
        .await
        .context("Failed to fetch prices")?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&prices)?);
    } else {
        print!("{}", format_prices(&cmd.addresses, &prices));
    }

    Ok(())
}

/// Handle overview command
async fn overview_command(client: &BirdeyeClient, cmd: OverviewCmd) -> Result<()> {
    tracing::info!("Fetching token overview for {}", cmd.address);

    let overview = client
        .fetch_token_overview(&cmd.address)
        .await
        .context("Failed to fetch token overview")?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print!("{}", format_overview(&overview));
    }

    Ok(())
}

/// One `address price` line per requested address, in request order
pub(crate) fn format_prices(addresses: &[String], prices: &HashMap<String, PriceInfo>) -> String {
    let mut out = String::new();
    for address in addresses {
        if let Some(info) = prices.get(address) {
            out.push_str(&format!("{}  {}\n", address, info.price));
        }
    }
    out
}

pub(crate) fn format_overview(overview: &TokenOverview) -> String {
    let last_trade = overview
        .last_trade_at()
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| overview.last_trade_unix_time.to_string());

    format!(
        "{} ({})\n\
         \x20 Address:     {}\n\
         \x20 Decimals:    {}\n\
         \x20 Liquidity:   ${:.2}\n\
         \x20 Market cap:  ${:.2}\n\
         \x20 Volume 24h:  ${:.2}\n\
         \x20 Change 24h:  {:.2}%\n\
         \x20 Last trade:  {}\n\
         \x20 Logo:        {}\n",
        overview.name,
        overview.symbol,
        overview.address,
        overview.decimals,
        overview.liquidity,
        overview.market_cap,
        overview.volume_24h_usd,
        overview.change_24h_percent,
        last_trade,
        overview.logo_uri,
    )
}
