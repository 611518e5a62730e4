//! Entity types shared by the store, the services and the HTTP layer.
//!
//! - [`User`], [`Wallet`], [`Token`], [`Portfolio`], [`Transaction`],
//!   [`CrmIntegration`] - stored records
//! - `New*` - insert payloads (everything except store-assigned fields)
//! - `*Patch` - partial updates with shallow-merge semantics
//! - [`units`] - base-unit conversions for token amounts

mod crm;
pub mod error;
pub mod id;
mod portfolio;
mod token;
mod transaction;
pub mod units;
mod user;
mod wallet;

pub use crm::{CrmIntegration, CrmIntegrationPatch, NewCrmIntegration};
pub use error::DomainError;
pub use id::{CrmIntegrationId, PortfolioId, TokenId, TransactionId, UserId, WalletId};
pub use portfolio::{NewPortfolio, Portfolio, PortfolioPatch};
pub use token::{default_tokens, NewToken, Token, TokenPatch};
pub use transaction::{
    NewTransaction, Transaction, TransactionKind, TransactionPatch, TransactionStatus,
};
pub use user::{NewUser, User, UserPatch};
pub use wallet::{NewWallet, Wallet, WalletPatch};
