//! Blockscout block explorer client (REST API v2).

mod dto;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use self::dto::{
    as_f64, as_u64, AddressResponse, ChartResponse, Page, StatsResponse, TokenBalanceItem,
    TransactionItem,
};
use crate::adapter::outbound::http::JsonHttp;
use crate::error::Result;
use crate::port::{BlockExplorer, ChainStats, ExplorerTransaction, GasPricePoint, TokenBalance};

const SERVICE: &str = "blockscout";

/// Client for one Blockscout instance.
pub struct BlockscoutClient {
    http: JsonHttp,
    base_url: String,
}

impl BlockscoutClient {
    /// `base_url` is the API root, e.g. `https://eth.blockscout.com/api`.
    #[must_use]
    pub fn new(http: JsonHttp, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v2/{}", self.base_url, path)
    }
}

#[async_trait]
impl BlockExplorer for BlockscoutClient {
    async fn native_balance(&self, address: &str) -> Result<Option<String>> {
        let url = self.url(&format!("addresses/{address}"));
        let response: AddressResponse = self.http.get(SERVICE, &url, None).await?;
        Ok(response.coin_balance)
    }

    async fn token_balances(&self, address: &str) -> Result<Vec<TokenBalance>> {
        let url = self.url(&format!("addresses/{address}/tokens?type=ERC-20"));
        let page: Page<TokenBalanceItem> = self.http.get(SERVICE, &url, None).await?;

        let balances: Vec<TokenBalance> = page
            .items
            .into_iter()
            .filter_map(|item| {
                let symbol = item.token.symbol?;
                let decimals = item.token.decimals.as_ref().and_then(as_u64);
                let Some(decimals) = decimals.and_then(|d| u32::try_from(d).ok()) else {
                    warn!(%symbol, "Skipping token balance without decimals");
                    return None;
                };
                Some(TokenBalance {
                    symbol,
                    contract_address: item.token.address.unwrap_or_default(),
                    decimals,
                    raw_value: item.value.unwrap_or_else(|| "0".to_string()),
                })
            })
            .collect();
        debug!(address, count = balances.len(), "Fetched token balances");
        Ok(balances)
    }

    async fn recent_transactions(&self, address: &str) -> Result<Vec<ExplorerTransaction>> {
        let url = self.url(&format!(
            "addresses/{address}/transactions?filter=to%20%7C%20from"
        ));
        let page: Page<TransactionItem> = self.http.get(SERVICE, &url, None).await?;

        Ok(page
            .items
            .into_iter()
            .map(|item| ExplorerTransaction {
                hash: item.hash,
                method: item.method,
                status: item.status,
            })
            .collect())
    }

    async fn stats(&self) -> Result<ChainStats> {
        let stats: StatsResponse = self.http.get(SERVICE, &self.url("stats"), None).await?;

        Ok(ChainStats {
            total_blocks: stats.total_blocks.as_ref().and_then(as_u64),
            total_transactions: stats.total_transactions.as_ref().and_then(as_u64),
            transactions_per_second: stats.transactions_per_second.as_ref().and_then(as_f64),
            network_utilization_percentage: stats
                .network_utilization_percentage
                .as_ref()
                .and_then(as_f64),
            average_block_time: stats.average_block_time.as_ref().and_then(as_f64),
        })
    }

    async fn gas_price_chart(&self) -> Result<Vec<GasPricePoint>> {
        let chart: ChartResponse = self
            .http
            .get(SERVICE, &self.url("stats/charts/gas-price"), None)
            .await?;

        Ok(chart
            .chart_data
            .into_iter()
            .filter_map(|point| {
                let value = as_f64(&point.value).and_then(Decimal::from_f64_retain)?;
                Some(GasPricePoint {
                    date: point.date,
                    value,
                })
            })
            .collect())
    }
}
