pub mod download;
pub mod fetch;

use anyhow::{Context, Result};
use crypto_daily_prices::alphavantage::{AlphaVantageClient, ClientConfig};
use crypto_daily_prices::config::API_KEY_ENV;
use crypto_daily_prices::FetchConfig;
use tracing::warn;

/// Build the API client from config plus the environment key
fn build_client(config: &FetchConfig) -> Result<AlphaVantageClient> {
    let client = AlphaVantageClient::from_env_with_config(ClientConfig::from(config))
        .context("Failed to create HTTP client")?;

    if !client.has_api_key() {
        warn!("{} is not set; every request will fail", API_KEY_ENV);
    }

    Ok(client)
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")
}
