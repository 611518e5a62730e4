//! In-memory store implementation.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::debug;

use super::table::Table;
use crate::domain::{
    default_tokens, CrmIntegration, CrmIntegrationId, CrmIntegrationPatch, NewCrmIntegration,
    NewPortfolio, NewToken, NewTransaction, NewUser, NewWallet, Portfolio, PortfolioId,
    PortfolioPatch, Token, TokenId, TokenPatch, Transaction, TransactionId, TransactionPatch,
    TransactionStatus, User, UserId, UserPatch, Wallet, WalletId, WalletPatch,
};
use crate::port::Storage;

/// Process-local store with one lock per entity kind.
///
/// Each lock guards both the records and the id counter of its kind, so id
/// assignment and insert are a single critical section. Nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Table<User>>,
    wallets: RwLock<Table<Wallet>>,
    tokens: RwLock<Table<Token>>,
    portfolios: RwLock<Table<Portfolio>>,
    transactions: RwLock<Table<Transaction>>,
    crm_integrations: RwLock<Table<CrmIntegration>>,
}

impl MemoryStore {
    /// Create a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with [`default_tokens`] (ids 1..=5).
    pub fn with_default_tokens() -> Self {
        let store = Self::new();
        for token in default_tokens() {
            store.create_token(token);
        }
        store
    }

    /// Record counts per kind, in the order users, wallets, tokens,
    /// portfolios, transactions, CRM integrations.
    pub fn counts(&self) -> [usize; 6] {
        [
            self.users.read().len(),
            self.wallets.read().len(),
            self.tokens.read().len(),
            self.portfolios.read().len(),
            self.transactions.read().len(),
            self.crm_integrations.read().len(),
        ]
    }
}

/// Current time, never earlier than `previous`.
fn restamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match previous {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}

impl Storage for MemoryStore {
    fn get_user(&self, id: UserId) -> Option<User> {
        self.users.read().get(id.value())
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.read().find(|user| user.username == username)
    }

    fn create_user(&self, user: NewUser) -> User {
        self.users.write().insert_with(|id| User {
            id: UserId::new(id),
            username: user.username,
            password: user.password,
        })
    }

    fn update_user(&self, id: UserId, patch: UserPatch) -> bool {
        let found = self
            .users
            .write()
            .update(id.value(), |user| patch.apply(user));
        if !found {
            debug!(%id, "update skipped, no such user");
        }
        found
    }

    fn get_wallet(&self, id: WalletId) -> Option<Wallet> {
        self.wallets.read().get(id.value())
    }

    fn get_wallet_by_address(&self, address: &str) -> Option<Wallet> {
        self.wallets.read().find(|wallet| wallet.address == address)
    }

    fn get_wallets_by_user_id(&self, user_id: UserId) -> Vec<Wallet> {
        self.wallets
            .read()
            .filter(|wallet| wallet.user_id == Some(user_id))
    }

    fn create_wallet(&self, wallet: NewWallet) -> Wallet {
        self.wallets.write().insert_with(|id| Wallet {
            id: WalletId::new(id),
            user_id: wallet.user_id,
            address: wallet.address,
            connected: wallet.connected,
            created_at: Utc::now(),
        })
    }

    fn update_wallet(&self, id: WalletId, patch: WalletPatch) -> bool {
        let found = self
            .wallets
            .write()
            .update(id.value(), |wallet| patch.apply(wallet));
        if !found {
            debug!(%id, "update skipped, no such wallet");
        }
        found
    }

    fn update_wallet_connection(&self, address: &str, connected: bool) -> bool {
        let found = self.wallets.write().update_first(
            |wallet| wallet.address == address,
            |wallet| wallet.connected = connected,
        );
        if !found {
            debug!(address, "connection update skipped, unknown wallet");
        }
        found
    }

    fn get_token(&self, id: TokenId) -> Option<Token> {
        self.tokens.read().get(id.value())
    }

    fn get_all_tokens(&self) -> Vec<Token> {
        self.tokens.read().all()
    }

    fn get_token_by_symbol(&self, symbol: &str) -> Option<Token> {
        self.tokens.read().find(|token| token.symbol == symbol)
    }

    fn create_token(&self, token: NewToken) -> Token {
        self.tokens.write().insert_with(|id| Token {
            id: TokenId::new(id),
            symbol: token.symbol,
            name: token.name,
            address: token.address,
            decimals: token.decimals,
            logo_url: token.logo_url,
        })
    }

    fn update_token(&self, id: TokenId, patch: TokenPatch) -> bool {
        let found = self
            .tokens
            .write()
            .update(id.value(), |token| patch.apply(token));
        if !found {
            debug!(%id, "update skipped, no such token");
        }
        found
    }

    fn get_portfolio(&self, id: PortfolioId) -> Option<Portfolio> {
        self.portfolios.read().get(id.value())
    }

    fn get_portfolio_by_wallet_id(&self, wallet_id: WalletId) -> Vec<Portfolio> {
        self.portfolios
            .read()
            .filter(|entry| entry.wallet_id == Some(wallet_id))
    }

    fn create_portfolio(&self, portfolio: NewPortfolio) -> Portfolio {
        self.portfolios.write().insert_with(|id| Portfolio {
            id: PortfolioId::new(id),
            wallet_id: portfolio.wallet_id,
            token_id: portfolio.token_id,
            balance: portfolio.balance,
            value_usd: portfolio.value_usd,
            updated_at: Utc::now(),
        })
    }

    fn update_portfolio(&self, id: PortfolioId, patch: PortfolioPatch) -> bool {
        let found = self.portfolios.write().update(id.value(), |entry| {
            patch.apply(entry);
            entry.updated_at = restamp(Some(entry.updated_at));
        });
        if !found {
            debug!(%id, "update skipped, no such portfolio entry");
        }
        found
    }

    fn get_transaction(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions.read().get(id.value())
    }

    fn get_transaction_by_hash(&self, hash: &str) -> Option<Transaction> {
        self.transactions.read().find(|tx| tx.hash == hash)
    }

    fn get_transactions_by_wallet_id(&self, wallet_id: WalletId) -> Vec<Transaction> {
        let mut transactions = self
            .transactions
            .read()
            .filter(|tx| tx.wallet_id == Some(wallet_id));
        // Newest first. The sort is stable, so equal timestamps keep insertion order.
        transactions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        transactions
    }

    fn create_transaction(&self, transaction: NewTransaction) -> Transaction {
        self.transactions.write().insert_with(|id| Transaction {
            id: TransactionId::new(id),
            wallet_id: transaction.wallet_id,
            hash: transaction.hash,
            kind: transaction.kind,
            from_token: transaction.from_token,
            to_token: transaction.to_token,
            amount: transaction.amount,
            value_usd: transaction.value_usd,
            gas_used: transaction.gas_used,
            status: transaction.status,
            timestamp: Utc::now(),
        })
    }

    fn update_transaction(&self, id: TransactionId, patch: TransactionPatch) -> bool {
        let found = self
            .transactions
            .write()
            .update(id.value(), |tx| patch.apply(tx));
        if !found {
            debug!(%id, "update skipped, no such transaction");
        }
        found
    }

    fn update_transaction_status(&self, hash: &str, status: TransactionStatus) -> bool {
        let found = self
            .transactions
            .write()
            .update_first(|tx| tx.hash == hash, |tx| tx.status = status);
        if !found {
            debug!(hash, %status, "status update skipped, unknown transaction");
        }
        found
    }

    fn get_crm_integration(&self, id: CrmIntegrationId) -> Option<CrmIntegration> {
        self.crm_integrations.read().get(id.value())
    }

    fn get_crm_integrations_by_user_id(&self, user_id: UserId) -> Vec<CrmIntegration> {
        self.crm_integrations
            .read()
            .filter(|integration| integration.user_id == Some(user_id))
    }

    fn create_crm_integration(&self, integration: NewCrmIntegration) -> CrmIntegration {
        self.crm_integrations.write().insert_with(|id| CrmIntegration {
            id: CrmIntegrationId::new(id),
            user_id: integration.user_id,
            provider: integration.provider,
            connected: integration.connected,
            api_key: integration.api_key,
            last_sync: None,
        })
    }

    fn update_crm_integration(&self, id: CrmIntegrationId, patch: CrmIntegrationPatch) -> bool {
        let found = self
            .crm_integrations
            .write()
            .update(id.value(), |integration| {
                patch.apply(integration);
                integration.last_sync = Some(restamp(integration.last_sync));
            });
        if !found {
            debug!(%id, "update skipped, no such CRM integration");
        }
        found
    }
}
