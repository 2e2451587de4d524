//! Reshaping and persistence of daily price series
//!
//! Converts the provider's digital currency payload into the standard daily
//! format shared with the equities downloader, and writes one JSON file per
//! symbol.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::alphavantage::{CryptoDailyResponse, FetchError, FetchResult};
use crate::{DailyBar, MetaData, StandardRecord, Symbol, MISSING_FIELD, OUTPUT_SIZE_COMPACT};

// =============================================================================
// Constants
// =============================================================================

/// Used when the payload has no `1. Information` entry
pub const DEFAULT_INFORMATION: &str = "Daily Prices (open, high, low, close) and Volumes";

/// Used when the payload has no `7. Time Zone` entry
pub const DEFAULT_TIME_ZONE: &str = "UTC";

const META_INFORMATION: &str = "1. Information";
const META_LAST_REFRESHED: &str = "6. Last Refreshed";
const META_TIME_ZONE: &str = "7. Time Zone";

/// Per-date keys, identical in the crypto payload and the standard format
const OPEN: &str = "1. open";
const HIGH: &str = "2. high";
const LOW: &str = "3. low";
const CLOSE: &str = "4. close";
const VOLUME: &str = "5. volume";

// =============================================================================
// Reshaping
// =============================================================================

/// Convert a digital currency payload into the standard daily format.
///
/// Every source date is kept. Missing OHLCV fields become `"0"`.
pub fn to_standard_format(response: &CryptoDailyResponse, symbol: &Symbol) -> StandardRecord {
    let meta_data = MetaData {
        information: response
            .meta_str(META_INFORMATION)
            .unwrap_or(DEFAULT_INFORMATION)
            .to_string(),
        symbol: symbol.to_string(),
        last_refreshed: response.meta_str(META_LAST_REFRESHED).map(str::to_string),
        output_size: OUTPUT_SIZE_COMPACT.to_string(),
        time_zone: response
            .meta_str(META_TIME_ZONE)
            .unwrap_or(DEFAULT_TIME_ZONE)
            .to_string(),
    };

    let time_series = response
        .time_series
        .iter()
        .map(|(date, values)| (date.clone(), to_daily_bar(values)))
        .collect();

    StandardRecord {
        meta_data,
        time_series,
    }
}

fn to_daily_bar(values: &Map<String, Value>) -> DailyBar {
    DailyBar {
        open: field_or_zero(values, OPEN),
        high: field_or_zero(values, HIGH),
        low: field_or_zero(values, LOW),
        close: field_or_zero(values, CLOSE),
        volume: field_or_zero(values, VOLUME),
    }
}

/// Strings pass through, numbers keep their JSON text, anything else is missing
fn field_or_zero(values: &Map<String, Value>, key: &str) -> String {
    match values.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => MISSING_FIELD.to_string(),
    }
}

// =============================================================================
// Writer
// =============================================================================

/// Writes standard records as `daily_prices_<SYMBOL>.json`
#[derive(Debug, Clone)]
pub struct DailyPriceWriter {
    pub output_dir: PathBuf,
}

impl DailyPriceWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Destination path for a symbol
    pub fn path_for(&self, symbol: &Symbol) -> PathBuf {
        self.output_dir.join(symbol.file_name())
    }

    /// Write the record, replacing any previous file for the symbol.
    ///
    /// Output is UTF-8 JSON with 4-space indentation; non-ASCII text is
    /// written as-is.
    pub fn save(&self, record: &StandardRecord, symbol: &Symbol) -> FetchResult<PathBuf> {
        fs::create_dir_all(&self.output_dir).map_err(|source| FetchError::Io {
            path: self.output_dir.clone(),
            source,
        })?;

        let filepath = self.path_for(symbol);
        let contents = to_pretty_json(record).map_err(|e| FetchError::Io {
            path: filepath.clone(),
            source: e.into(),
        })?;

        fs::write(&filepath, contents).map_err(|source| FetchError::Io {
            path: filepath.clone(),
            source,
        })?;

        info!(
            "Saved {} days for {} to {}",
            record.len(),
            symbol,
            filepath.display()
        );
        Ok(filepath)
    }
}

/// Serialize with a 4-space indent
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
