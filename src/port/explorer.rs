//! Block explorer port.
//!
//! Read-only chain data for a single network: address balances, recent
//! activity and network statistics. Amounts are raw base-unit strings
//! exactly as the explorer reports them.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

/// ERC-20 balance held by an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub symbol: String,
    pub contract_address: String,
    pub decimals: u32,
    /// Integer base units.
    pub raw_value: String,
}

/// Summary of a transaction touching an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerTransaction {
    pub hash: String,
    /// Decoded contract method, when the explorer could decode one.
    pub method: Option<String>,
    /// Explorer status string (`ok`, `error`, `pending`, ...).
    pub status: Option<String>,
}

/// Network-wide counters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainStats {
    pub total_blocks: Option<u64>,
    pub total_transactions: Option<u64>,
    pub transactions_per_second: Option<f64>,
    pub network_utilization_percentage: Option<f64>,
    /// Milliseconds.
    pub average_block_time: Option<f64>,
}

/// One point of the explorer's gas price chart (gwei).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GasPricePoint {
    pub date: String,
    pub value: Decimal,
}

#[async_trait]
pub trait BlockExplorer: Send + Sync {
    /// Native coin balance in wei, `None` if the explorer has no record.
    async fn native_balance(&self, address: &str) -> Result<Option<String>>;

    async fn token_balances(&self, address: &str) -> Result<Vec<TokenBalance>>;

    /// Most recent transactions sent from or to `address`, newest first.
    async fn recent_transactions(&self, address: &str) -> Result<Vec<ExplorerTransaction>>;

    async fn stats(&self) -> Result<ChainStats>;

    /// Gas price history, oldest first.
    async fn gas_price_chart(&self) -> Result<Vec<GasPricePoint>>;
}
