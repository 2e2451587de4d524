//! Alpha Vantage response types for digital currency daily data

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{FetchError, FetchResult};

/// Payload key carrying the per-date OHLCV entries
pub const TIME_SERIES_KEY: &str = "Time Series (Digital Currency Daily)";

/// Keys the provider uses for rate-limit and informational notices
pub const NOTICE_KEYS: &[&str] = &["Note", "Information"];

/// Successful `DIGITAL_CURRENCY_DAILY` payload.
///
/// Entries are kept as raw JSON maps: field names have changed across API
/// versions and any of them may be missing. Dates keep the order the
/// provider sent them in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CryptoDailyResponse {
    #[serde(rename = "Meta Data", default)]
    pub meta_data: Map<String, Value>,
    #[serde(rename = "Time Series (Digital Currency Daily)")]
    pub time_series: IndexMap<String, Map<String, Value>>,
}

impl CryptoDailyResponse {
    /// Classify a parsed response body.
    ///
    /// Notices win over payload checks: a body carrying `Note` is a failure
    /// even if it also has data.
    pub fn from_value(value: Value) -> FetchResult<Self> {
        if let Some(message) = provider_notice(&value) {
            return Err(FetchError::Provider(message));
        }

        let has_series = value
            .as_object()
            .is_some_and(|obj| obj.contains_key(TIME_SERIES_KEY));
        if !has_series {
            return Err(FetchError::MissingTimeSeries(value.to_string()));
        }

        serde_json::from_value(value).map_err(|e| FetchError::Schema(e.to_string()))
    }

    /// Parse and classify a raw response body
    pub fn from_body(body: &str) -> FetchResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    /// String value of a metadata field, if present
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta_data.get(key).and_then(Value::as_str)
    }
}

/// Extract the notice text if the body is a rate-limit or information message
pub fn provider_notice(value: &Value) -> Option<String> {
    NOTICE_KEYS
        .iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}
