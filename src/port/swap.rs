//! Swap aggregator port.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Parameters shared by quotes and swap builds. Amounts are base units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    pub from_token_address: String,
    pub to_token_address: String,
    pub amount: u128,
}

/// Indicative price for a swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapQuote {
    /// Output amount in base units of the destination token.
    pub to_amount: String,
    pub estimated_gas: u64,
    /// Aggregator routing description, passed through untouched.
    pub protocols: Option<Value>,
}

/// A swap transaction ready for the wallet to sign.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapTransaction {
    /// The raw transaction object (`to`, `data`, `value`, `gas`, ...).
    pub tx: Value,
    /// Present only if the aggregator already knows the hash.
    pub hash: Option<String>,
    pub gas: u64,
    pub protocols: Option<Value>,
}

#[async_trait]
pub trait SwapAggregator: Send + Sync {
    async fn quote(&self, request: &SwapRequest) -> Result<SwapQuote>;

    /// Build a signable swap from `from_address` with `slippage_percent`
    /// tolerance (1 = 1%).
    async fn build_swap(
        &self,
        request: &SwapRequest,
        from_address: &str,
        slippage_percent: u32,
    ) -> Result<SwapTransaction>;
}
