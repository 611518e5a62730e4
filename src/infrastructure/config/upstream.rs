//! Third-party API endpoints and shared HTTP client settings.

use serde::Deserialize;

/// HTTP client configuration shared by every upstream client.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for transient failures.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    3_000
}

const fn default_http_retry_max_attempts() -> u32 {
    2
}

const fn default_http_retry_backoff_ms() -> u64 {
    250
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}

/// Base URLs for the price oracle, block explorer and swap aggregator.
///
/// The aggregator API key is loaded from `ONEINCH_API_KEY` at runtime
/// (never from the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_coingecko_url")]
    pub coingecko_url: String,
    #[serde(default = "default_blockscout_url")]
    pub blockscout_url: String,
    #[serde(default = "default_oneinch_url")]
    pub oneinch_url: String,
    /// EVM chain id used in aggregator paths.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    #[serde(default)]
    pub http: HttpClientConfig,
    #[serde(skip)]
    pub oneinch_api_key: Option<String>,
}

fn default_coingecko_url() -> String {
    "https://api.coingecko.com/api/v3".into()
}

fn default_blockscout_url() -> String {
    "https://eth.blockscout.com/api".into()
}

fn default_oneinch_url() -> String {
    "https://api.1inch.dev".into()
}

const fn default_chain_id() -> u64 {
    1
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            coingecko_url: default_coingecko_url(),
            blockscout_url: default_blockscout_url(),
            oneinch_url: default_oneinch_url(),
            chain_id: default_chain_id(),
            http: HttpClientConfig::default(),
            oneinch_api_key: None,
        }
    }
}
