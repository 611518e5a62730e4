//! Dashboard behaviour settings.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Storage backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Seed ETH, USDC, USDT, UNI and WBTC at startup.
    #[serde(default = "default_true")]
    pub seed_default_tokens: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            seed_default_tokens: true,
        }
    }
}

/// Defaults applied when a request does not identify its user or wallet.
///
/// There is no session system; the dashboard front-end runs against a
/// single user and wallet unless it passes an address explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_id")]
    pub default_user_id: u64,
    #[serde(default = "default_id")]
    pub default_wallet_id: u64,
    /// ETH/USD used for gas and value estimates when the oracle is down.
    #[serde(default = "default_fallback_eth_usd")]
    pub fallback_eth_usd: Decimal,
}

const fn default_id() -> u64 {
    1
}

fn default_fallback_eth_usd() -> Decimal {
    Decimal::from(2500)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_user_id: default_id(),
            default_wallet_id: default_id(),
            fallback_eth_usd: default_fallback_eth_usd(),
        }
    }
}
