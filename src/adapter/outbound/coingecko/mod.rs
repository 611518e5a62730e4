//! CoinGecko price oracle.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;
use url::Url;

use crate::adapter::outbound::http::JsonHttp;
use crate::error::Result;
use crate::port::PriceOracle;

const SERVICE: &str = "coingecko";

/// `simple/price` response: asset id -> currency -> price.
type SimplePriceResponse = HashMap<String, HashMap<String, Option<Decimal>>>;

/// Client for the CoinGecko public REST API.
pub struct CoinGeckoClient {
    http: JsonHttp,
    base_url: String,
}

impl CoinGeckoClient {
    /// `base_url` is the API root, e.g. `https://api.coingecko.com/api/v3`.
    #[must_use]
    pub fn new(http: JsonHttp, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn price_url(&self, ids: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/simple/price", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("ids", &ids.join(","))
            .append_pair("vs_currencies", "usd");
        Ok(url)
    }
}

#[async_trait]
impl PriceOracle for CoinGeckoClient {
    async fn usd_prices(&self, ids: &[&str]) -> Result<HashMap<String, Decimal>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let url = self.price_url(ids)?;
        let response: SimplePriceResponse = self.http.get(SERVICE, url.as_str(), None).await?;

        let prices: HashMap<String, Decimal> = response
            .into_iter()
            .filter_map(|(id, quotes)| quotes.get("usd").copied().flatten().map(|p| (id, p)))
            .collect();
        debug!(requested = ids.len(), returned = prices.len(), "Fetched USD prices");
        Ok(prices)
    }
}
