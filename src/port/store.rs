//! Storage port for dashboard records.
//!
//! This module defines the CRUD contract over the six entity kinds. It is
//! deliberately infallible: a lookup miss is `None`, an update that finds
//! nothing returns `false`, and nothing is ever rejected.

use crate::domain::{
    CrmIntegration, CrmIntegrationId, CrmIntegrationPatch, NewCrmIntegration, NewPortfolio,
    NewToken, NewTransaction, NewUser, NewWallet, Portfolio, PortfolioId, PortfolioPatch, Token,
    TokenId, TokenPatch, Transaction, TransactionId, TransactionPatch, TransactionStatus, User,
    UserId, UserPatch, Wallet, WalletId, WalletPatch,
};

/// Keyed-record store for users, wallets, tokens, portfolios, transactions
/// and CRM integrations.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`); the HTTP layer
///   shares one instance across all requests.
/// - Ids are assigned per kind, strictly increasing from 1, never reused.
/// - `create_*` stamps creation timestamps and fills omitted optionals.
/// - `update_*` shallow-merges the patch and returns whether a record was
///   found. Missing ids are a silent no-op.
/// - Uniqueness of `Wallet::address` and `Transaction::hash` is not
///   enforced; key lookups return the earliest inserted match.
pub trait Storage: Send + Sync {
    // Users

    fn get_user(&self, id: UserId) -> Option<User>;

    fn get_user_by_username(&self, username: &str) -> Option<User>;

    fn create_user(&self, user: NewUser) -> User;

    fn update_user(&self, id: UserId, patch: UserPatch) -> bool;

    // Wallets

    fn get_wallet(&self, id: WalletId) -> Option<Wallet>;

    fn get_wallet_by_address(&self, address: &str) -> Option<Wallet>;

    /// All wallets owned by `user_id`, in creation order.
    fn get_wallets_by_user_id(&self, user_id: UserId) -> Vec<Wallet>;

    fn create_wallet(&self, wallet: NewWallet) -> Wallet;

    fn update_wallet(&self, id: WalletId, patch: WalletPatch) -> bool;

    /// Set the connection flag of the wallet with this address.
    fn update_wallet_connection(&self, address: &str, connected: bool) -> bool;

    // Tokens

    fn get_token(&self, id: TokenId) -> Option<Token>;

    /// Every token, in creation order.
    fn get_all_tokens(&self) -> Vec<Token>;

    fn get_token_by_symbol(&self, symbol: &str) -> Option<Token>;

    fn create_token(&self, token: NewToken) -> Token;

    fn update_token(&self, id: TokenId, patch: TokenPatch) -> bool;

    // Portfolios

    fn get_portfolio(&self, id: PortfolioId) -> Option<Portfolio>;

    /// All portfolio entries of `wallet_id`, in creation order.
    fn get_portfolio_by_wallet_id(&self, wallet_id: WalletId) -> Vec<Portfolio>;

    fn create_portfolio(&self, portfolio: NewPortfolio) -> Portfolio;

    /// Merge `patch` and re-stamp `updated_at`.
    fn update_portfolio(&self, id: PortfolioId, patch: PortfolioPatch) -> bool;

    // Transactions

    fn get_transaction(&self, id: TransactionId) -> Option<Transaction>;

    fn get_transaction_by_hash(&self, hash: &str) -> Option<Transaction>;

    /// All transactions of `wallet_id`, most recent first.
    fn get_transactions_by_wallet_id(&self, wallet_id: WalletId) -> Vec<Transaction>;

    fn create_transaction(&self, transaction: NewTransaction) -> Transaction;

    fn update_transaction(&self, id: TransactionId, patch: TransactionPatch) -> bool;

    /// Set the status of the transaction with this hash. The prior status is
    /// not checked.
    fn update_transaction_status(&self, hash: &str, status: TransactionStatus) -> bool;

    // CRM integrations

    fn get_crm_integration(&self, id: CrmIntegrationId) -> Option<CrmIntegration>;

    /// All integrations of `user_id`, in creation order.
    fn get_crm_integrations_by_user_id(&self, user_id: UserId) -> Vec<CrmIntegration>;

    fn create_crm_integration(&self, integration: NewCrmIntegration) -> CrmIntegration;

    /// Merge `patch` and stamp `last_sync`.
    fn update_crm_integration(&self, id: CrmIntegrationId, patch: CrmIntegrationPatch) -> bool;
}
