//! Swap quotes and swap transaction building.

use std::collections::HashMap;
use std::fmt::Write as _;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::prices::{eth_usd, price_for_symbol, TRACKED_ASSETS};
use super::state::AppState;
use super::wallet::get_or_create;
use crate::domain::units::{format_fixed, from_base_units, parse_positive_amount, to_base_units};
use crate::domain::{NewTransaction, Token, TransactionKind, TransactionStatus};
use crate::error::{Error, Result};
use crate::port::SwapRequest;

/// Gas price assumed when converting gas units to ETH (20 gwei).
pub const GAS_PRICE_ETH: Decimal = dec!(0.00000002);

/// Slippage tolerance advertised with quotes, in percent.
const QUOTE_SLIPPAGE: Decimal = dec!(0.5);

/// Slippage tolerance used when building swaps, in percent.
const EXECUTE_SLIPPAGE_PERCENT: u32 = 1;

/// Gas estimate (USD) reported with fallback quotes.
const FALLBACK_GAS_USD: &str = "12.45";

/// Where a quote's numbers came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSource {
    Aggregator,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub from_token: String,
    pub to_token: String,
    pub from_amount: String,
    pub to_amount: String,
    pub rate: String,
    pub gas_estimate: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub slippage: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocols: Option<Value>,
    pub source: QuoteSource,
}

/// Body of a swap execution request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapOrder {
    #[serde(default)]
    pub from_token: String,
    #[serde(default)]
    pub to_token: String,
    #[serde(default)]
    pub from_amount: String,
    pub to_amount: Option<String>,
    #[serde(default)]
    pub wallet_address: String,
}

/// A built swap awaiting the wallet's signature.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapExecution {
    pub transaction_data: Value,
    pub transaction_hash: String,
    pub status: &'static str,
    pub message: String,
    pub gas_estimate: u64,
    pub protocols: Option<Value>,
}

/// Fixed rates used when the aggregator cannot quote.
fn mock_rate(from: &str, to: &str) -> Decimal {
    let rate = |from: &str, to: &str| match (from, to) {
        ("ETH", "USDC") => Some(dec!(2847.32)),
        ("USDC", "ETH") => Some(dec!(0.000351)),
        ("ETH", "USDT") => Some(dec!(2845.50)),
        ("USDT", "ETH") => Some(dec!(0.000351)),
        _ => None,
    };
    rate(from, to)
        .or_else(|| rate(to, from).and_then(|reverse| Decimal::ONE.checked_div(reverse)))
        .unwrap_or(Decimal::ONE)
}

fn known_token(state: &AppState, symbol: &str) -> Result<Token> {
    state
        .store
        .get_token_by_symbol(symbol)
        .ok_or_else(|| Error::InvalidInput("Unsupported token".into()))
}

fn rate_label(from: &str, to: &str, rate: Decimal) -> String {
    format!("1 {from} = {} {to}", format_fixed(rate, 6))
}

/// Quote `amount` of `from` in `to`.
///
/// Validation failures are errors. An aggregator failure is not: the quote
/// falls back to fixed demo rates and is tagged [`QuoteSource::Fallback`].
pub async fn quote(state: &AppState, from: &str, to: &str, amount: &str) -> Result<Quote> {
    let parsed = parse_positive_amount(amount)
        .map_err(|_| Error::InvalidInput("Invalid amount".into()))?;
    let from_token = known_token(state, from)?;
    let to_token = known_token(state, to)?;

    let request = SwapRequest {
        from_token_address: from_token.address.clone(),
        to_token_address: to_token.address.clone(),
        amount: to_base_units(parsed, from_token.decimals)?,
    };

    let quoted = match state.swaps.quote(&request).await {
        Ok(quote) => match from_base_units(&quote.to_amount, to_token.decimals) {
            Some(to_amount) => Some((to_amount, quote)),
            None => {
                warn!(to_amount = %quote.to_amount, "Aggregator returned unreadable amount");
                None
            }
        },
        Err(err) => {
            warn!(from, to, error = %err, "Aggregator quote failed, using fallback rate");
            None
        }
    };

    let Some((to_amount, aggregated)) = quoted else {
        let rate = mock_rate(from, to);
        let to_amount = parsed
            .checked_mul(rate)
            .ok_or_else(|| Error::InvalidInput("Invalid amount".into()))?;
        return Ok(Quote {
            from_token: from.to_string(),
            to_token: to.to_string(),
            from_amount: amount.to_string(),
            to_amount: format_fixed(to_amount, 6),
            rate: rate_label(from, to, rate),
            gas_estimate: FALLBACK_GAS_USD.to_string(),
            slippage: QUOTE_SLIPPAGE,
            protocols: None,
            source: QuoteSource::Fallback,
        });
    };

    let eth_price = eth_usd(state).await;
    let gas_usd = gas_cost_usd(aggregated.estimated_gas, eth_price);
    let rate = to_amount
        .round_dp(6)
        .checked_div(parsed)
        .unwrap_or_default();

    Ok(Quote {
        from_token: from.to_string(),
        to_token: to.to_string(),
        from_amount: amount.to_string(),
        to_amount: format_fixed(to_amount, 6),
        rate: rate_label(from, to, rate),
        gas_estimate: format_fixed(gas_usd, 2),
        slippage: QUOTE_SLIPPAGE,
        protocols: aggregated.protocols,
        source: QuoteSource::Aggregator,
    })
}

/// USD cost of `gas` units at [`GAS_PRICE_ETH`], zero when the product
/// overflows.
fn gas_cost_usd(gas: u64, eth_price: Decimal) -> Decimal {
    Decimal::from(gas)
        .checked_mul(GAS_PRICE_ETH)
        .and_then(|eth| eth.checked_mul(eth_price))
        .unwrap_or_else(|| {
            warn!(gas, %eth_price, "Gas cost overflowed");
            Decimal::ZERO
        })
}

/// Random `0x`-prefixed 32-byte hash for swaps the aggregator left unhashed.
fn placeholder_hash() -> String {
    let bytes: [u8; 32] = rand::random();
    let mut hash = String::with_capacity(66);
    hash.push_str("0x");
    for byte in bytes {
        let _ = write!(hash, "{byte:02x}");
    }
    hash
}

/// Build a swap for the order's wallet and record it as a pending
/// transaction.
pub async fn execute(state: &AppState, order: SwapOrder) -> Result<SwapExecution> {
    let required = [
        &order.from_token,
        &order.to_token,
        &order.from_amount,
        &order.wallet_address,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(Error::InvalidInput("Missing required fields".into()));
    }
    let wallet_address = order.wallet_address.trim();

    let amount = parse_positive_amount(&order.from_amount)
        .map_err(|_| Error::InvalidInput("Invalid amount".into()))?;
    let from_token = known_token(state, &order.from_token)?;
    let to_token = known_token(state, &order.to_token)?;

    let request = SwapRequest {
        from_token_address: from_token.address,
        to_token_address: to_token.address,
        amount: to_base_units(amount, from_token.decimals)?,
    };
    let built = state
        .swaps
        .build_swap(&request, wallet_address, EXECUTE_SLIPPAGE_PERCENT)
        .await?;

    let prices = state
        .oracle
        .usd_prices(&TRACKED_ASSETS)
        .await
        .unwrap_or_else(|err| {
            warn!(error = %err, "Prices unavailable, recording swap without value");
            HashMap::new()
        });
    let eth_price = price_for_symbol("ETH", &prices).unwrap_or(state.settings.fallback_eth_usd);
    let value_usd = price_for_symbol(&order.from_token, &prices).and_then(|p| {
        let value = amount.checked_mul(p);
        if value.is_none() {
            warn!(
                token = %order.from_token,
                %amount,
                price = %p,
                "Swap value overflowed, recording without value"
            );
        }
        value.map(|v| format_fixed(v, 2))
    });
    let gas_usd = gas_cost_usd(built.gas, eth_price);

    let wallet = get_or_create(state.store.as_ref(), wallet_address);
    let hash = built.hash.clone().unwrap_or_else(placeholder_hash);

    let mut record = NewTransaction::new(hash, TransactionKind::Swap, TransactionStatus::Pending)
        .for_wallet(wallet.id)
        .between(order.from_token.clone(), order.to_token.clone());
    record.amount = Some(amount.normalize().to_string());
    record.value_usd = value_usd;
    record.gas_used = Some(format_fixed(gas_usd, 2));
    let transaction = state.store.create_transaction(record);

    info!(
        tx_id = %transaction.id,
        hash = %transaction.hash,
        wallet_id = %wallet.id,
        from = %order.from_token,
        to = %order.to_token,
        amount = %amount,
        expected = order.to_amount.as_deref().unwrap_or("-"),
        "Swap built, awaiting signature"
    );

    Ok(SwapExecution {
        transaction_data: built.tx,
        transaction_hash: transaction.hash,
        status: "ready_to_sign",
        message: "Transaction built successfully, ready for wallet signing".into(),
        gas_estimate: built.gas,
        protocols: built.protocols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_rates_cover_both_directions() {
        assert_eq!(mock_rate("ETH", "USDC"), dec!(2847.32));
        assert_eq!(mock_rate("USDT", "ETH"), dec!(0.000351));
    }

    #[test]
    fn unlisted_pair_trades_at_parity() {
        assert_eq!(mock_rate("UNI", "WBTC"), Decimal::ONE);
        assert_eq!(mock_rate("USDC", "USDT"), Decimal::ONE);
    }

    #[test]
    fn rate_label_uses_six_decimals() {
        assert_eq!(rate_label("ETH", "USDC", dec!(2847.32)), "1 ETH = 2847.320000 USDC");
    }

    #[test]
    fn gas_cost_converts_units_through_eth_price() {
        assert_eq!(gas_cost_usd(180_000, dec!(2000)), dec!(7.2));
        assert_eq!(gas_cost_usd(u64::MAX, Decimal::MAX), Decimal::ZERO);
    }

    #[test]
    fn placeholder_hash_is_32_bytes_of_hex() {
        let hash = placeholder_hash();
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
        assert!(hash[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
