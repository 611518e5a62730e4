//! ERC-20 (and native) token metadata.

use serde::{Deserialize, Serialize};

use super::id::TokenId;

/// Token metadata used for pricing, balance scaling and swap routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: TokenId,
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub decimals: u32,
    pub logo_url: Option<String>,
}

/// Insert payload for [`Token`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewToken {
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub decimals: u32,
    pub logo_url: Option<String>,
}

impl NewToken {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        decimals: u32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            address: address.into(),
            decimals,
            logo_url: None,
        }
    }

    #[must_use]
    pub fn with_logo(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }
}

/// Partial update for [`Token`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPatch {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub decimals: Option<u32>,
    pub logo_url: Option<Option<String>>,
}

impl TokenPatch {
    pub fn apply(self, token: &mut Token) {
        if let Some(symbol) = self.symbol {
            token.symbol = symbol;
        }
        if let Some(name) = self.name {
            token.name = name;
        }
        if let Some(address) = self.address {
            token.address = address;
        }
        if let Some(decimals) = self.decimals {
            token.decimals = decimals;
        }
        if let Some(logo_url) = self.logo_url {
            token.logo_url = logo_url;
        }
    }
}

/// Mainnet tokens the dashboard tracks out of the box.
///
/// `0xEeee…EEeE` is the aggregator convention for native ETH.
#[must_use]
pub fn default_tokens() -> Vec<NewToken> {
    vec![
        NewToken::new(
            "ETH",
            "Ethereum",
            "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
            18,
        ),
        NewToken::new(
            "USDC",
            "USD Coin",
            "0xA0b86a33E6417c62f6C3D2B4F95f8a89E75Aa1b1",
            6,
        ),
        NewToken::new(
            "USDT",
            "Tether",
            "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            6,
        ),
        NewToken::new(
            "UNI",
            "Uniswap",
            "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984",
            18,
        ),
        NewToken::new(
            "WBTC",
            "Wrapped Bitcoin",
            "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599",
            8,
        ),
    ]
}
