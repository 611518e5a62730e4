//! Store-assigned surrogate identifiers.
//!
//! Every entity kind has its own id type so a `WalletId` can never be passed
//! where a `TokenId` is expected. Ids start at 1 and are handed out by the
//! store in strictly increasing order; they carry no external meaning.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the underlying value.
            #[must_use]
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{}"), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

surrogate_id!(
    /// Identifier of a [`User`](super::User).
    UserId,
    "user"
);
surrogate_id!(
    /// Identifier of a [`Wallet`](super::Wallet).
    WalletId,
    "wallet"
);
surrogate_id!(
    /// Identifier of a [`Token`](super::Token).
    TokenId,
    "token"
);
surrogate_id!(
    /// Identifier of a [`Portfolio`](super::Portfolio) entry.
    PortfolioId,
    "portfolio"
);
surrogate_id!(
    /// Identifier of a [`Transaction`](super::Transaction).
    TransactionId,
    "tx"
);
surrogate_id!(
    /// Identifier of a [`CrmIntegration`](super::CrmIntegration).
    CrmIntegrationId,
    "crm"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_prefix() {
        assert_eq!(WalletId::new(7).to_string(), "wallet-7");
        assert_eq!(TransactionId::new(1).to_string(), "tx-1");
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&TokenId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn ordering_follows_value() {
        assert!(PortfolioId::new(1) < PortfolioId::new(2));
    }
}
