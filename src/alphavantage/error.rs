//! Error taxonomy for a single symbol's fetch/transform/write cycle

use std::path::PathBuf;
use thiserror::Error;

use crate::config::API_KEY_ENV;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{} not found in environment variables", API_KEY_ENV)]
    MissingApiKey,

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Built from errors stripped of their URL, which carries the API key
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Rate-limit or informational notice (`Note` / `Information`)
    #[error("API error: {0}")]
    Provider(String),

    #[error("no time series data found in response: {0}")]
    MissingTimeSeries(String),

    #[error("unexpected response shape: {0}")]
    Schema(String),

    #[error("JSON decode error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Terminal state name used in per-symbol logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingApiKey | Self::InvalidUrl(_) => "CONFIG_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Provider(_) => "RATE_LIMITED",
            Self::MissingTimeSeries(_) | Self::Schema(_) => "NO_DATA",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Io { .. } => "WRITE_ERROR",
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::MissingApiKey.to_string(),
            "ALPHAADVANTAGE_API_KEY not found in environment variables"
        );
        assert_eq!(
            FetchError::Provider("slow down".to_string()).to_string(),
            "API error: slow down"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "PARSE_ERROR");
    }
}
