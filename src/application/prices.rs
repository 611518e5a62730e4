//! Spot prices for tracked assets.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

use super::state::AppState;
use crate::error::Result;

/// Oracle ids of every asset the dashboard values.
pub const TRACKED_ASSETS: [&str; 5] = [
    "ethereum",
    "usd-coin",
    "tether",
    "uniswap",
    "wrapped-bitcoin",
];

/// Oracle id for a token symbol.
#[must_use]
pub fn oracle_id(symbol: &str) -> Option<&'static str> {
    match symbol {
        "ETH" | "WETH" => Some("ethereum"),
        "BTC" => Some("bitcoin"),
        "USDC" => Some("usd-coin"),
        "USDT" => Some("tether"),
        "UNI" => Some("uniswap"),
        "WBTC" => Some("wrapped-bitcoin"),
        _ => None,
    }
}

/// USD price of `symbol` from an oracle snapshot.
///
/// Stablecoins are assumed to sit at their peg when the oracle omits them.
#[must_use]
pub fn price_for_symbol(symbol: &str, prices: &HashMap<String, Decimal>) -> Option<Decimal> {
    let quoted = oracle_id(symbol).and_then(|id| prices.get(id).copied());
    match (quoted, symbol) {
        (Some(price), _) => Some(price),
        (None, "USDC" | "USDT") => Some(Decimal::ONE),
        (None, _) => None,
    }
}

/// ETH and BTC headline prices.
#[derive(Debug, Clone, Serialize)]
pub struct SpotPrices {
    #[serde(with = "rust_decimal::serde::float")]
    pub eth: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub btc: Decimal,
}

pub async fn spot_prices(state: &AppState) -> Result<SpotPrices> {
    let prices = state.oracle.usd_prices(&["ethereum", "bitcoin"]).await?;
    Ok(SpotPrices {
        eth: prices.get("ethereum").copied().unwrap_or_default(),
        btc: prices.get("bitcoin").copied().unwrap_or_default(),
    })
}

/// Current ETH/USD, or the configured fallback when the oracle is down.
pub async fn eth_usd(state: &AppState) -> Decimal {
    match state.oracle.usd_prices(&["ethereum"]).await {
        Ok(prices) => prices
            .get("ethereum")
            .copied()
            .unwrap_or(state.settings.fallback_eth_usd),
        Err(err) => {
            warn!(error = %err, "ETH price unavailable, using fallback");
            state.settings.fallback_eth_usd
        }
    }
}
