//! Transaction history and status changes.

use tracing::{info, warn};

use super::state::AppState;
use crate::domain::{Transaction, TransactionStatus};
use crate::error::{Error, Result};

/// Transactions of the wallet with `address` (or the default wallet), most
/// recent first. An unknown address has no history.
pub fn list(state: &AppState, address: Option<&str>) -> Vec<Transaction> {
    let wallet_id = match address.map(str::trim).filter(|a| !a.is_empty()) {
        Some(address) => match state.store.get_wallet_by_address(address) {
            Some(wallet) => wallet.id,
            None => return Vec::new(),
        },
        None => state.default_wallet(),
    };
    state.store.get_transactions_by_wallet_id(wallet_id)
}

/// Set the status of the transaction with `hash`.
pub fn set_status(state: &AppState, hash: &str, status: &str) -> Result<Transaction> {
    let status: TransactionStatus = status.trim().parse()?;

    let previous = state.store.get_transaction_by_hash(hash).map(|tx| tx.status);
    if let Some(previous) = previous.filter(|p| p.is_terminal() && *p != status) {
        warn!(hash, %previous, %status, "Overwriting settled transaction status");
    }
    if !state.store.update_transaction_status(hash, status) {
        return Err(Error::NotFound(format!("transaction {hash} not found")));
    }
    info!(hash, %status, "Transaction status updated");

    state
        .store
        .get_transaction_by_hash(hash)
        .ok_or_else(|| Error::NotFound(format!("transaction {hash} not found")))
}
