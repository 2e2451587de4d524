//! Core data types shared by the fetcher, reshaper and batch driver

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default value for any OHLCV field missing upstream
pub const MISSING_FIELD: &str = "0";

/// Output size label written into every standard record
pub const OUTPUT_SIZE_COMPACT: &str = "Compact";

/// Ticker symbol (e.g. "BTC")
///
/// Backed by Arc<str>; the same symbol is cloned into logs, file names and
/// batch bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(std::sync::Arc<str>);

impl Symbol {
    /// Normalizes to a trimmed, uppercase ticker
    pub fn new(s: impl AsRef<str>) -> Self {
        Symbol(std::sync::Arc::from(s.as_ref().trim().to_uppercase().as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Output file name for this symbol's daily series
    pub fn file_name(&self) -> String {
        format!("daily_prices_{}.json", self.0)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

/// One day of OHLCV data in the standard format.
///
/// Values stay as the decimal strings the provider sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. volume")]
    pub volume: String,
}

/// Metadata block of the standard format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    #[serde(rename = "1. Information")]
    pub information: String,
    #[serde(rename = "2. Symbol")]
    pub symbol: String,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: Option<String>,
    #[serde(rename = "4. Output Size")]
    pub output_size: String,
    #[serde(rename = "5. Time Zone")]
    pub time_zone: String,
}

/// Daily price series in the format shared with the equities downloader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRecord {
    #[serde(rename = "Meta Data")]
    pub meta_data: MetaData,
    /// Keyed by ISO date (YYYY-MM-DD), in provider order (newest first)
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: IndexMap<String, DailyBar>,
}

impl StandardRecord {
    /// Number of trading days in the series
    pub fn len(&self) -> usize {
        self.time_series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_series.is_empty()
    }
}

/// Outcome counters for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub successful: usize,
    pub failed: usize,
    pub delay_seconds: u64,
    /// Failed symbols with the reason each one failed
    pub failures: Vec<(Symbol, String)>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}
