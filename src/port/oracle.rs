//! Price oracle port.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

/// USD spot prices keyed by oracle asset id (`ethereum`, `usd-coin`, ...).
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Fetch USD prices for `ids`. Ids the oracle does not know are absent
    /// from the result rather than an error.
    async fn usd_prices(&self, ids: &[&str]) -> Result<HashMap<String, Decimal>>;
}
