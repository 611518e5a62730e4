use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use nexus_portfolio::error::{Result, UpstreamError};
use nexus_portfolio::port::{
    BlockExplorer, ChainStats, ExplorerTransaction, GasPricePoint, PriceOracle, SwapAggregator,
    SwapQuote, SwapRequest, SwapTransaction, TokenBalance,
};

fn down(service: &'static str) -> nexus_portfolio::error::Error {
    UpstreamError::Unavailable {
        service,
        reason: "scripted failure".into(),
    }
    .into()
}

/// Oracle returning a fixed price table, or failing when `prices` is `None`.
#[derive(Default)]
pub struct FakeOracle {
    pub prices: Option<HashMap<String, Decimal>>,
}

impl FakeOracle {
    pub fn with(prices: &[(&str, Decimal)]) -> Self {
        Self {
            prices: Some(
                prices
                    .iter()
                    .map(|(id, price)| ((*id).to_string(), *price))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl PriceOracle for FakeOracle {
    async fn usd_prices(&self, ids: &[&str]) -> Result<HashMap<String, Decimal>> {
        let prices = self.prices.as_ref().ok_or_else(|| down("oracle"))?;
        Ok(prices
            .iter()
            .filter(|(id, _)| ids.contains(&id.as_str()))
            .map(|(id, price)| (id.clone(), *price))
            .collect())
    }
}

/// Explorer with scripted responses. `None` fields fail.
#[derive(Default)]
pub struct FakeExplorer {
    pub native: Option<String>,
    pub tokens: Option<Vec<TokenBalance>>,
    pub transactions: Option<Vec<ExplorerTransaction>>,
    pub stats: Option<ChainStats>,
    pub gas: Option<Vec<GasPricePoint>>,
}

pub fn token_balance(symbol: &str, decimals: u32, raw: &str) -> TokenBalance {
    TokenBalance {
        symbol: symbol.to_string(),
        contract_address: format!("0x{}", symbol.to_lowercase()),
        decimals,
        raw_value: raw.to_string(),
    }
}

pub fn explorer_tx(hash: &str, method: Option<&str>, status: Option<&str>) -> ExplorerTransaction {
    ExplorerTransaction {
        hash: hash.to_string(),
        method: method.map(str::to_string),
        status: status.map(str::to_string),
    }
}

#[async_trait]
impl BlockExplorer for FakeExplorer {
    async fn native_balance(&self, _address: &str) -> Result<Option<String>> {
        Ok(self.native.clone())
    }

    async fn token_balances(&self, _address: &str) -> Result<Vec<TokenBalance>> {
        self.tokens.clone().ok_or_else(|| down("explorer"))
    }

    async fn recent_transactions(&self, _address: &str) -> Result<Vec<ExplorerTransaction>> {
        self.transactions.clone().ok_or_else(|| down("explorer"))
    }

    async fn stats(&self) -> Result<ChainStats> {
        self.stats.clone().ok_or_else(|| down("explorer"))
    }

    async fn gas_price_chart(&self) -> Result<Vec<GasPricePoint>> {
        self.gas.clone().ok_or_else(|| down("explorer"))
    }
}

/// Aggregator with scripted responses that records what it was asked.
#[derive(Default)]
pub struct FakeAggregator {
    pub quote: Option<SwapQuote>,
    pub swap: Option<SwapTransaction>,
    pub requests: Mutex<Vec<SwapRequest>>,
}

#[async_trait]
impl SwapAggregator for FakeAggregator {
    async fn quote(&self, request: &SwapRequest) -> Result<SwapQuote> {
        self.requests.lock().push(request.clone());
        self.quote.clone().ok_or_else(|| down("aggregator"))
    }

    async fn build_swap(
        &self,
        request: &SwapRequest,
        _from_address: &str,
        _slippage_percent: u32,
    ) -> Result<SwapTransaction> {
        self.requests.lock().push(request.clone());
        self.swap.clone().ok_or_else(|| down("aggregator"))
    }
}
