//! Per-wallet token balances.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{PortfolioId, TokenId, WalletId};

/// One token position held by one wallet.
///
/// `balance` and `value_usd` are decimal strings; the store keeps them
/// verbatim and never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: PortfolioId,
    pub wallet_id: Option<WalletId>,
    pub token_id: Option<TokenId>,
    pub balance: String,
    pub value_usd: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for [`Portfolio`]. `updated_at` is stamped by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPortfolio {
    pub wallet_id: Option<WalletId>,
    pub token_id: Option<TokenId>,
    pub balance: String,
    pub value_usd: Option<String>,
}

impl NewPortfolio {
    pub fn new(wallet_id: WalletId, token_id: TokenId, balance: impl Into<String>) -> Self {
        Self {
            wallet_id: Some(wallet_id),
            token_id: Some(token_id),
            balance: balance.into(),
            value_usd: None,
        }
    }

    #[must_use]
    pub fn valued_at(mut self, value_usd: impl Into<String>) -> Self {
        self.value_usd = Some(value_usd.into());
        self
    }
}

/// Partial update for [`Portfolio`]. The store re-stamps `updated_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortfolioPatch {
    pub wallet_id: Option<Option<WalletId>>,
    pub token_id: Option<Option<TokenId>>,
    pub balance: Option<String>,
    pub value_usd: Option<Option<String>>,
}

impl PortfolioPatch {
    pub fn apply(self, portfolio: &mut Portfolio) {
        if let Some(wallet_id) = self.wallet_id {
            portfolio.wallet_id = wallet_id;
        }
        if let Some(token_id) = self.token_id {
            portfolio.token_id = token_id;
        }
        if let Some(balance) = self.balance {
            portfolio.balance = balance;
        }
        if let Some(value_usd) = self.value_usd {
            portfolio.value_usd = value_usd;
        }
    }
}
