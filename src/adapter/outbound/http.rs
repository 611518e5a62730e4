//! Shared HTTP plumbing for upstream REST clients.

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::{Result, UpstreamError};
use crate::infrastructure::config::upstream::HttpClientConfig;

/// JSON-over-HTTP GET with retry on timeouts and connect errors.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct JsonHttp {
    http: HttpClient,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl JsonHttp {
    #[must_use]
    pub fn from_config(config: &HttpClientConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// Non-success statuses become [`UpstreamError::Status`]; they are not
    /// retried.
    pub async fn get<T>(&self, service: &'static str, url: &str, bearer: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            debug!(service, url, attempt, "GET");

            let mut request = self.http.get(url);
            if let Some(token) = bearer {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(UpstreamError::Unavailable {
                            service,
                            reason: err.to_string(),
                        }
                        .into());
                    }
                    self.backoff(service, attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(UpstreamError::Status {
                    service,
                    status: status.as_u16(),
                }
                .into());
            }

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(UpstreamError::Malformed {
                            service,
                            reason: err.to_string(),
                        }
                        .into());
                    }
                    self.backoff(service, attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(
        &self,
        service: &'static str,
        attempt: u32,
        max_attempts: u32,
        err: &reqwest::Error,
    ) {
        warn!(
            service,
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}
