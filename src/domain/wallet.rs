//! Connected wallets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{UserId, WalletId};

/// A wallet address known to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: WalletId,
    pub user_id: Option<UserId>,
    pub address: String,
    #[serde(rename = "isConnected")]
    pub connected: bool,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for [`Wallet`]. `created_at` is stamped by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWallet {
    pub user_id: Option<UserId>,
    pub address: String,
    pub connected: bool,
}

impl NewWallet {
    /// An unowned, disconnected wallet.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn owned_by(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }
}

/// Partial update for [`Wallet`].
///
/// `user_id: Some(None)` detaches the wallet from its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletPatch {
    pub user_id: Option<Option<UserId>>,
    pub address: Option<String>,
    pub connected: Option<bool>,
}

impl WalletPatch {
    pub fn apply(self, wallet: &mut Wallet) {
        if let Some(user_id) = self.user_id {
            wallet.user_id = user_id;
        }
        if let Some(address) = self.address {
            wallet.address = address;
        }
        if let Some(connected) = self.connected {
            wallet.connected = connected;
        }
    }
}
