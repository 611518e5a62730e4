//! 1inch swap aggregator client.

mod dto;

use async_trait::async_trait;
use tracing::{debug, info};
use url::Url;

use self::dto::{gas_units, QuoteResponse, SwapResponse};
use crate::adapter::outbound::http::JsonHttp;
use crate::error::Result;
use crate::port::{SwapAggregator, SwapQuote, SwapRequest, SwapTransaction};

const SERVICE: &str = "1inch";

/// Client for the 1inch aggregation API on one chain.
pub struct OneInchClient {
    http: JsonHttp,
    base_url: String,
    chain_id: u64,
    api_key: Option<String>,
}

impl OneInchClient {
    #[must_use]
    pub fn new(
        http: JsonHttp,
        base_url: impl Into<String>,
        chain_id: u64,
        api_key: Option<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            chain_id,
            api_key,
        }
    }

    fn endpoint(&self, action: &str, request: &SwapRequest) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/v5.0/{}/{}",
            self.base_url, self.chain_id, action
        ))?;
        url.query_pairs_mut()
            .append_pair("fromTokenAddress", &request.from_token_address)
            .append_pair("toTokenAddress", &request.to_token_address)
            .append_pair("amount", &request.amount.to_string());
        Ok(url)
    }
}

#[async_trait]
impl SwapAggregator for OneInchClient {
    async fn quote(&self, request: &SwapRequest) -> Result<SwapQuote> {
        let url = self.endpoint("quote", request)?;
        let response: QuoteResponse = self
            .http
            .get(SERVICE, url.as_str(), self.api_key.as_deref())
            .await?;

        debug!(to_amount = %response.to_token_amount, "Received swap quote");
        Ok(SwapQuote {
            estimated_gas: gas_units(response.estimated_gas.as_ref()),
            to_amount: response.to_token_amount,
            protocols: response.protocols,
        })
    }

    async fn build_swap(
        &self,
        request: &SwapRequest,
        from_address: &str,
        slippage_percent: u32,
    ) -> Result<SwapTransaction> {
        let mut url = self.endpoint("swap", request)?;
        url.query_pairs_mut()
            .append_pair("fromAddress", from_address)
            .append_pair("slippage", &slippage_percent.to_string());

        let response: SwapResponse = self
            .http
            .get(SERVICE, url.as_str(), self.api_key.as_deref())
            .await?;

        let gas = gas_units(response.tx.get("gas"));
        let hash = response
            .tx
            .get("hash")
            .and_then(|h| h.as_str())
            .map(str::to_string);
        info!(from = from_address, gas, "Built swap transaction");

        Ok(SwapTransaction {
            tx: response.tx,
            hash,
            gas,
            protocols: response.protocols,
        })
    }
}
