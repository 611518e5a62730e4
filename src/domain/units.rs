//! Conversion between human-readable token amounts and on-chain base units.
//!
//! Explorers and aggregators speak in integer base units (wei for ETH,
//! 10^-6 for USDC, ...). The dashboard speaks in decimal amounts.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::error::DomainError;

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Parse a caller-supplied amount, rejecting zero and negatives.
pub fn parse_positive_amount(raw: &str) -> Result<Decimal, DomainError> {
    let amount =
        Decimal::from_str(raw.trim()).map_err(|_| DomainError::InvalidAmount(raw.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount(raw.to_string()));
    }
    Ok(amount)
}

/// Scale a decimal amount to integer base units, truncating dust below one unit.
pub fn to_base_units(amount: Decimal, decimals: u32) -> Result<u128, DomainError> {
    let overflow = || DomainError::AmountOverflow {
        amount: amount.to_string(),
        decimals,
    };

    let mut scaled = amount;
    for _ in 0..decimals {
        scaled = scaled.checked_mul(Decimal::TEN).ok_or_else(overflow)?;
    }
    scaled.trunc().to_u128().ok_or_else(overflow)
}

/// Interpret an integer base-unit string (as returned by explorers) as a
/// decimal amount. Returns `None` when the string is not an integer or the
/// value exceeds what `Decimal` can hold.
#[must_use]
pub fn from_base_units(raw: &str, decimals: u32) -> Option<Decimal> {
    let units = raw.trim().parse::<i128>().ok()?;
    if decimals <= MAX_SCALE {
        return Decimal::try_from_i128_with_scale(units, decimals)
            .ok()
            .map(|d| d.normalize());
    }
    // Scale beyond 28 digits: shift in two steps.
    let head = Decimal::try_from_i128_with_scale(units, MAX_SCALE).ok()?;
    let mut value = head;
    for _ in 0..(decimals - MAX_SCALE) {
        value /= Decimal::TEN;
    }
    Some(value.normalize())
}

/// Format an amount with a fixed number of fractional digits.
#[must_use]
pub fn format_fixed(amount: Decimal, dp: u32) -> String {
    format!("{:.*}", dp as usize, amount.round_dp(dp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn one_eth_is_ten_to_the_eighteen_wei() {
        assert_eq!(
            to_base_units(dec!(1), 18).unwrap(),
            1_000_000_000_000_000_000
        );
    }

    #[test]
    fn fractional_dust_is_truncated() {
        assert_eq!(to_base_units(dec!(1.2345678), 6).unwrap(), 1_234_567);
    }

    #[test]
    fn base_units_scale_back_down() {
        assert_eq!(from_base_units("2500000", 6), Some(dec!(2.5)));
        assert_eq!(
            from_base_units("1500000000000000000", 18),
            Some(dec!(1.5))
        );
        assert_eq!(from_base_units("0", 18), Some(Decimal::ZERO));
    }

    #[test]
    fn non_integer_base_units_are_rejected() {
        assert_eq!(from_base_units("1.5", 6), None);
        assert_eq!(from_base_units("", 6), None);
    }

    #[test]
    fn amounts_must_be_positive() {
        assert_eq!(parse_positive_amount(" 0.5 ").unwrap(), dec!(0.5));
        assert!(matches!(
            parse_positive_amount("0"),
            Err(DomainError::InvalidAmount(_))
        ));
        assert!(parse_positive_amount("-1").is_err());
        assert!(parse_positive_amount("abc").is_err());
    }

    #[test]
    fn fixed_formatting_pads_and_rounds() {
        assert_eq!(format_fixed(dec!(1.5), 6), "1.500000");
        assert_eq!(format_fixed(dec!(12.3456), 2), "12.35");
    }
}
