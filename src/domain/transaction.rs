//! Wallet transaction history.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{TransactionId, WalletId};

/// What a transaction did from the wallet's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Swap,
    Send,
    Receive,
}

impl TransactionKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swap => "swap",
            Self::Send => "send",
            Self::Receive => "receive",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swap" => Ok(Self::Swap),
            "send" => Ok(Self::Send),
            "receive" => Ok(Self::Receive),
            other => Err(DomainError::UnknownTransactionKind(other.to_string())),
        }
    }
}

/// Settlement state of a transaction.
///
/// Conventionally moves `Pending -> Success` or `Pending -> Failed`; callers
/// own that progression, the store accepts any assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Pending,
    Success,
    Failed,
}

impl TransactionStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// Returns true once the transaction has settled either way.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::UnknownTransactionStatus(other.to_string())),
        }
    }
}

/// A transaction recorded against a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub wallet_id: Option<WalletId>,
    pub hash: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub amount: Option<String>,
    pub value_usd: Option<String>,
    pub gas_used: Option<String>,
    pub status: TransactionStatus,
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for [`Transaction`]. `timestamp` is stamped by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub wallet_id: Option<WalletId>,
    pub hash: String,
    pub kind: TransactionKind,
    pub from_token: Option<String>,
    pub to_token: Option<String>,
    pub amount: Option<String>,
    pub value_usd: Option<String>,
    pub gas_used: Option<String>,
    pub status: TransactionStatus,
}

impl NewTransaction {
    /// A transaction with only the required fields set.
    pub fn new(hash: impl Into<String>, kind: TransactionKind, status: TransactionStatus) -> Self {
        Self {
            wallet_id: None,
            hash: hash.into(),
            kind,
            from_token: None,
            to_token: None,
            amount: None,
            value_usd: None,
            gas_used: None,
            status,
        }
    }

    #[must_use]
    pub fn for_wallet(mut self, wallet_id: WalletId) -> Self {
        self.wallet_id = Some(wallet_id);
        self
    }

    #[must_use]
    pub fn between(mut self, from_token: impl Into<String>, to_token: impl Into<String>) -> Self {
        self.from_token = Some(from_token.into());
        self.to_token = Some(to_token.into());
        self
    }
}

/// Partial update for [`Transaction`]. `timestamp` is never re-stamped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionPatch {
    pub wallet_id: Option<Option<WalletId>>,
    pub hash: Option<String>,
    pub kind: Option<TransactionKind>,
    pub from_token: Option<Option<String>>,
    pub to_token: Option<Option<String>>,
    pub amount: Option<Option<String>>,
    pub value_usd: Option<Option<String>>,
    pub gas_used: Option<Option<String>>,
    pub status: Option<TransactionStatus>,
}

impl TransactionPatch {
    pub fn apply(self, tx: &mut Transaction) {
        if let Some(wallet_id) = self.wallet_id {
            tx.wallet_id = wallet_id;
        }
        if let Some(hash) = self.hash {
            tx.hash = hash;
        }
        if let Some(kind) = self.kind {
            tx.kind = kind;
        }
        if let Some(from_token) = self.from_token {
            tx.from_token = from_token;
        }
        if let Some(to_token) = self.to_token {
            tx.to_token = to_token;
        }
        if let Some(amount) = self.amount {
            tx.amount = amount;
        }
        if let Some(value_usd) = self.value_usd {
            tx.value_usd = value_usd;
        }
        if let Some(gas_used) = self.gas_used {
            tx.gas_used = gas_used;
        }
        if let Some(status) = self.status {
            tx.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase_names() {
        assert_eq!(
            "success".parse::<TransactionStatus>().unwrap(),
            TransactionStatus::Success
        );
        assert!("SUCCESS".parse::<TransactionStatus>().is_err());
    }

    #[test]
    fn only_pending_is_non_terminal() {
        assert!(!TransactionStatus::Pending.is_terminal());
        assert!(TransactionStatus::Success.is_terminal());
        assert!(TransactionStatus::Failed.is_terminal());
    }

    #[test]
    fn kind_serializes_under_type_key() {
        let tx = Transaction {
            id: TransactionId::new(1),
            wallet_id: None,
            hash: "0xdef".into(),
            kind: TransactionKind::Receive,
            from_token: None,
            to_token: None,
            amount: None,
            value_usd: None,
            gas_used: None,
            status: TransactionStatus::Pending,
            timestamp: Utc::now(),
        };

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["type"], "receive");
        assert_eq!(json["status"], "pending");
        assert!(json["walletId"].is_null());
    }
}
