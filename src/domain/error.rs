//! Domain validation errors.
//!
//! These come from parsing caller-supplied values (enum names, token
//! amounts) into domain types. The store itself never produces them.

use thiserror::Error;

/// Errors that occur when a value cannot become a domain type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Transaction kind outside `swap` / `send` / `receive`.
    #[error("unknown transaction type '{0}'")]
    UnknownTransactionKind(String),

    /// Transaction status outside `pending` / `success` / `failed`.
    #[error("unknown transaction status '{0}'")]
    UnknownTransactionStatus(String),

    /// Amount is not a decimal number or is not strictly positive.
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// Amount does not fit the representable range once scaled.
    #[error("amount {amount} overflows at {decimals} decimals")]
    AmountOverflow { amount: String, decimals: u32 },
}
