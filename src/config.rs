//! Configuration management
//!
//! Handles loading and parsing of the JSON configuration file. The API key is
//! never stored in the file; it is resolved from the environment.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Symbol;

/// Environment variable holding the Alpha Vantage API key
pub const API_KEY_ENV: &str = "ALPHAADVANTAGE_API_KEY";

/// Default Alpha Vantage host
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Major cryptocurrencies, quoted in USD as a USDT proxy
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "BTC", "ETH", "XRP", "SOL", "ADA", "SUI", "LINK", "AVAX", "LTC", "DOT",
];

/// Configuration for a download run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub symbols: Vec<String>,
    /// Quote currency passed as `market`
    pub market: String,
    /// Pause between consecutive requests (free tier allows 5 calls/minute)
    pub delay_seconds: u64,
    pub output_dir: PathBuf,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            market: "USD".to_string(),
            delay_seconds: 12,
            output_dir: PathBuf::from("coin"),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FetchConfig {
    /// Load configuration from JSON file; missing keys fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FetchConfig =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;

        if config.symbols.is_empty() {
            anyhow::bail!("Config must list at least one symbol");
        }

        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn symbols(&self) -> Vec<Symbol> {
        self.symbols.iter().map(Symbol::new).collect()
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Read the API key from the environment; empty values count as missing
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FetchConfig::default();
        assert_eq!(config.symbols.len(), 10);
        assert_eq!(config.symbols[0], "BTC");
        assert_eq!(config.symbols[9], "DOT");
        assert_eq!(config.market, "USD");
        assert_eq!(config.delay(), Duration::from_secs(12));
        assert_eq!(config.output_dir, PathBuf::from("coin"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"symbols": ["btc", "eth"], "delay_seconds": 1}}"#).unwrap();

        let config = FetchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.symbols(), vec![Symbol::new("BTC"), Symbol::new("ETH")]);
        assert_eq!(config.delay_seconds, 1);
        assert_eq!(config.market, "USD");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_symbol_list_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"symbols": []}}"#).unwrap();

        assert!(FetchConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/default.json");
        let config = FetchConfig::from_file(path).unwrap();
        let defaults = FetchConfig::default();

        assert_eq!(config.symbols, defaults.symbols);
        assert_eq!(config.delay_seconds, defaults.delay_seconds);
        assert_eq!(config.output_dir, defaults.output_dir);
    }

    #[test]
    fn test_missing_file() {
        assert!(FetchConfig::from_file("does/not/exist.json").is_err());
        assert!(FetchConfig::load(None).is_ok());
    }
}
