//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings.
//! Configuration is loaded from a TOML file; every section is optional and
//! falls back to defaults. Environment variables override upstream URLs and
//! supply the aggregator API key.
//!
//! # Example
//!
//! ```no_run
//! use nexus_portfolio::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::io::ErrorKind;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use super::dashboard::{DashboardConfig, StorageConfig};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::upstream::UpstreamConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Third-party API endpoints.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    /// Default user/wallet and fallback pricing.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Read a non-empty environment variable.
fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Parse configuration from TOML content and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse_toml(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Self::parse_toml(""),
            Err(err) => Err(ConfigError::ReadFile(err).into()),
        }
    }

    fn apply_env(&mut self) {
        if let Some(url) = env_non_empty("COINGECKO_API_URL") {
            self.upstream.coingecko_url = url;
        }
        if let Some(url) = env_non_empty("BLOCKSCOUT_API_URL") {
            self.upstream.blockscout_url = url;
        }
        if let Some(url) = env_non_empty("ONEINCH_API_URL") {
            self.upstream.oneinch_url = url;
        }
        self.upstream.oneinch_api_key = env_non_empty("ONEINCH_API_KEY");
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        let urls = [
            ("coingecko_url", &self.upstream.coingecko_url),
            ("blockscout_url", &self.upstream.blockscout_url),
            ("oneinch_url", &self.upstream.oneinch_url),
        ];
        for (field, value) in urls {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
            Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "port",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.upstream.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.upstream.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        if self.dashboard.fallback_eth_usd <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "fallback_eth_usd",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.dashboard.default_user_id == 0 || self.dashboard.default_wallet_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "default_ids",
                reason: "ids start at 1".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
