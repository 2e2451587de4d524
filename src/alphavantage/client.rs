//! Alpha Vantage HTTP client
//!
//! Builds `DIGITAL_CURRENCY_DAILY` query URLs and classifies the response
//! body. No retries: callers decide how to pace requests.

use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use super::error::{FetchError, FetchResult};
use super::types::CryptoDailyResponse;
use crate::config::{api_key_from_env, FetchConfig, DEFAULT_BASE_URL};
use crate::Symbol;

/// API function identifier for daily digital currency prices
pub const DIGITAL_CURRENCY_DAILY: &str = "DIGITAL_CURRENCY_DAILY";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host, without the `/query` path
    pub base_url: String,
    /// Request timeout duration
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Point the client at a different host (e.g. a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&FetchConfig> for ClientConfig {
    fn from(config: &FetchConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout(),
        }
    }
}

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AlphaVantageClient {
    /// Create a client with an explicit API key (`None` means unset)
    pub fn new(api_key: Option<String>) -> FetchResult<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(api_key: Option<String>, config: ClientConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Network)?;

        Ok(AlphaVantageClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    /// Create a client using `ALPHAADVANTAGE_API_KEY` from the environment.
    ///
    /// A missing key is not an error here; every fetch reports it instead.
    pub fn from_env() -> FetchResult<Self> {
        Self::new(api_key_from_env())
    }

    /// Create a client from the environment with custom configuration
    pub fn from_env_with_config(config: ClientConfig) -> FetchResult<Self> {
        Self::with_config(api_key_from_env(), config)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the query URL for a symbol/market pair.
    ///
    /// Fails with [`FetchError::MissingApiKey`] before anything touches the
    /// network.
    pub fn build_url(&self, symbol: &Symbol, market: &str) -> FetchResult<Url> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;

        Url::parse_with_params(
            &format!("{}/query", self.base_url),
            &[
                ("function", DIGITAL_CURRENCY_DAILY),
                ("symbol", symbol.as_str()),
                ("market", market),
                ("apikey", api_key),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    /// Fetch and classify daily prices for one symbol
    ///
    /// # Arguments
    /// * `symbol` - Crypto ticker (e.g., "BTC")
    /// * `market` - Quote currency (e.g., "USD")
    pub async fn get_digital_currency_daily(
        &self,
        symbol: &Symbol,
        market: &str,
    ) -> FetchResult<CryptoDailyResponse> {
        let url = self.build_url(symbol, market)?;

        debug!(
            "GET {}/query function={} symbol={} market={}",
            self.base_url, DIGITAL_CURRENCY_DAILY, symbol, market
        );

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.without_url()))?;

        debug!("Response {} for {} ({} bytes)", status, symbol, body.len());

        CryptoDailyResponse::from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_key(key: Option<&str>) -> AlphaVantageClient {
        AlphaVantageClient::new(key.map(str::to_string)).unwrap()
    }

    #[test]
    fn test_build_url() {
        let client = client_with_key(Some("demo"));
        let url = client.build_url(&Symbol::new("BTC"), "USD").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.alphavantage.co/query?function=DIGITAL_CURRENCY_DAILY&symbol=BTC&market=USD&apikey=demo"
        );
    }

    #[test]
    fn test_build_url_without_key() {
        let client = client_with_key(None);
        assert!(!client.has_api_key());
        assert!(matches!(
            client.build_url(&Symbol::new("BTC"), "USD"),
            Err(FetchError::MissingApiKey)
        ));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert!(!client_with_key(Some("  ")).has_api_key());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9000/");
        let client = AlphaVantageClient::with_config(Some("k".to_string()), config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");

        let url = client.build_url(&Symbol::new("eth"), "EUR").unwrap();
        assert_eq!(url.path(), "/query");
        assert!(url.query().unwrap().contains("symbol=ETH&market=EUR"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().with_base_url("not a url");
        let client = AlphaVantageClient::with_config(Some("k".to_string()), config).unwrap();
        assert!(matches!(
            client.build_url(&Symbol::new("BTC"), "USD"),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
