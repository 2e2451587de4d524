//! Sequential batch download
//!
//! One request per symbol, in order, with a fixed pause between requests.
//! A failed symbol is logged and counted; it never stops the batch.

use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::alphavantage::{AlphaVantageClient, FetchError, FetchResult};
use crate::data::{to_standard_format, DailyPriceWriter};
use crate::{BatchResult, StandardRecord, Symbol};

/// Market used when a caller does not pick one (USD stands in for USDT)
pub const DEFAULT_MARKET: &str = "USD";

/// A symbol's record and where it was written
#[derive(Debug, Clone)]
pub struct SavedSeries {
    pub record: StandardRecord,
    pub path: PathBuf,
}

/// Fetch, reshape and write one symbol.
///
/// Every failure is logged here with the symbol attached before being
/// returned.
pub async fn fetch_and_save(
    client: &AlphaVantageClient,
    writer: &DailyPriceWriter,
    symbol: &Symbol,
    market: &str,
) -> FetchResult<SavedSeries> {
    info!("Fetching data for {}/{}...", symbol, market);

    let result: FetchResult<SavedSeries> = async {
        let response = client.get_digital_currency_daily(symbol, market).await?;
        let record = to_standard_format(&response, symbol);
        let path = writer.save(&record, symbol)?;
        Ok::<_, FetchError>(SavedSeries { record, path })
    }
    .await;

    match &result {
        Ok(saved) => info!(
            "Successfully saved data for {} to {}",
            symbol,
            saved.path.display()
        ),
        Err(e) => log_failure(symbol, e),
    }

    result
}

fn log_failure(symbol: &Symbol, err: &FetchError) {
    match err {
        FetchError::MissingApiKey => error!("Error for {}: {}", symbol, err),
        FetchError::Provider(message) => warn!("API Error for {}: {}", symbol, message),
        FetchError::MissingTimeSeries(raw) => {
            warn!("No time series data found for {}", symbol);
            warn!("Response: {}", raw);
        }
        FetchError::Schema(_) => warn!("Unusable response for {}: {}", symbol, err),
        FetchError::Network(_) => error!("Network error fetching {}: {}", symbol, err),
        FetchError::Parse(_) => error!("JSON decode error for {}: {}", symbol, err),
        FetchError::InvalidUrl(_) | FetchError::Io { .. } => {
            error!("Unexpected error for {}: {}", symbol, err)
        }
    }
}

/// Fetch every symbol in order, pausing `delay` between requests
pub async fn run_batch(
    client: &AlphaVantageClient,
    writer: &DailyPriceWriter,
    symbols: &[Symbol],
    market: &str,
    delay: Duration,
) -> BatchResult {
    let total = symbols.len();
    let mut result = BatchResult {
        delay_seconds: delay.as_secs(),
        ..Default::default()
    };

    info!("Starting crypto price collection for {} symbols...", total);
    info!(
        "Using {} second delay between calls to respect API rate limits",
        delay.as_secs()
    );

    for (i, symbol) in symbols.iter().enumerate() {
        info!("[{}/{}] Processing {}...", i + 1, total, symbol);

        match fetch_and_save(client, writer, symbol, market).await {
            Ok(_) => result.successful += 1,
            Err(e) => {
                info!("{} finished as {}", symbol, e.kind());
                result.failed += 1;
                result.failures.push((symbol.clone(), e.to_string()));
            }
        }

        if i + 1 < total {
            info!("Waiting {} seconds before next request...", delay.as_secs());
            tokio::time::sleep(delay).await;
        }
    }

    info!(
        "Summary: {} successful, {} failed",
        result.successful, result.failed
    );
    info!("Rate limit: {}s delay between calls", delay.as_secs());

    result
}
