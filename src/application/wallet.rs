//! Wallet registration and connection state.

use tracing::info;

use super::state::AppState;
use crate::domain::{NewWallet, Token, Wallet};
use crate::error::{Error, Result};
use crate::port::Storage;

/// Reject blank addresses before they reach the store.
pub fn require_address(address: &str) -> Result<&str> {
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::InvalidInput("Wallet address required".into()));
    }
    Ok(address)
}

/// Wallet with this address, registering a disconnected one if unknown.
///
/// Not atomic across the lookup and the insert: two concurrent first-time
/// callers can register the same address twice.
pub fn get_or_create(store: &dyn Storage, address: &str) -> Wallet {
    if let Some(wallet) = store.get_wallet_by_address(address) {
        return wallet;
    }
    let wallet = store.create_wallet(NewWallet::new(address));
    info!(wallet_id = %wallet.id, address, "Registered wallet");
    wallet
}

/// Mark the wallet connected, registering it on first contact.
pub fn connect(state: &AppState, address: &str) -> Result<Wallet> {
    let address = require_address(address)?;
    let store = state.store.as_ref();

    if !store.update_wallet_connection(address, true) {
        store.create_wallet(NewWallet::new(address).connected(true));
    }
    store
        .get_wallet_by_address(address)
        .ok_or_else(|| Error::NotFound(format!("wallet {address} not found")))
}

pub fn disconnect(state: &AppState, address: &str) -> Result<Wallet> {
    let address = require_address(address)?;
    let store = state.store.as_ref();

    if !store.update_wallet_connection(address, false) {
        return Err(Error::NotFound(format!("wallet {address} not found")));
    }
    store
        .get_wallet_by_address(address)
        .ok_or_else(|| Error::NotFound(format!("wallet {address} not found")))
}

pub fn list_tokens(state: &AppState) -> Vec<Token> {
    state.store.get_all_tokens()
}
