//! Crypto Daily Prices
//!
//! Downloads daily digital currency prices from Alpha Vantage and stores each
//! symbol as `daily_prices_<SYMBOL>.json` in the standard daily format shared
//! with the equities downloader.
//!
//! ## Example
//! ```no_run
//! use crypto_daily_prices::alphavantage::AlphaVantageClient;
//! use crypto_daily_prices::batch::{run_batch, DEFAULT_MARKET};
//! use crypto_daily_prices::data::DailyPriceWriter;
//! use crypto_daily_prices::FetchConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = FetchConfig::default();
//!     let client = AlphaVantageClient::from_env()?;
//!     let writer = DailyPriceWriter::new(&config.output_dir);
//!     let result = run_batch(&client, &writer, &config.symbols(), DEFAULT_MARKET, config.delay()).await;
//!     println!("{} successful, {} failed", result.successful, result.failed);
//!     Ok(())
//! }
//! ```

pub mod alphavantage;
pub mod batch;
pub mod config;
pub mod data;
pub mod types;

pub use config::FetchConfig;
pub use types::*;

pub use alphavantage::AlphaVantageClient;
