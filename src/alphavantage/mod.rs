//! Alpha Vantage API client for daily digital currency prices
//!
//! Only the public `DIGITAL_CURRENCY_DAILY` endpoint is used. An API key is
//! required and read from `ALPHAADVANTAGE_API_KEY`.
//!
//! # Example
//! ```no_run
//! use crypto_daily_prices::alphavantage::AlphaVantageClient;
//! use crypto_daily_prices::Symbol;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = AlphaVantageClient::from_env()?;
//!     let response = client.get_digital_currency_daily(&Symbol::new("BTC"), "USD").await?;
//!     println!("Fetched {} days", response.time_series.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{AlphaVantageClient, ClientConfig, DIGITAL_CURRENCY_DAILY};
pub use error::{FetchError, FetchResult};
pub use types::*;
