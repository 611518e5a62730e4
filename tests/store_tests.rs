//! Behaviour of the in-memory store through the `Storage` port.

use std::sync::Arc;
use std::thread;

use nexus_portfolio::adapter::outbound::memory::MemoryStore;
use nexus_portfolio::domain::{
    CrmIntegrationId, CrmIntegrationPatch, NewCrmIntegration, NewPortfolio, NewToken,
    NewTransaction, NewUser, NewWallet, PortfolioPatch, TokenId, TokenPatch, TransactionKind,
    TransactionPatch, TransactionStatus, UserId, UserPatch, WalletId, WalletPatch,
};
use nexus_portfolio::port::Storage;

fn pending_swap(hash: &str, wallet_id: WalletId) -> NewTransaction {
    NewTransaction::new(hash, TransactionKind::Swap, TransactionStatus::Pending)
        .for_wallet(wallet_id)
}

#[test]
fn ids_increase_from_one_per_kind() {
    let store = MemoryStore::new();

    let users: Vec<_> = (0..3)
        .map(|i| store.create_user(NewUser::new(format!("user{i}"), "pw")).id)
        .collect();
    let wallet = store.create_wallet(NewWallet::new("0x1"));

    assert_eq!(users, [UserId::new(1), UserId::new(2), UserId::new(3)]);
    assert_eq!(wallet.id, WalletId::new(1));
}

#[test]
fn omitted_optionals_come_back_empty() {
    let store = MemoryStore::new();

    let wallet = store.create_wallet(NewWallet::new("0xABC"));
    let token = store.create_token(NewToken::new("ETH", "Ethereum", "0xeeee", 18));
    let entry = store.create_portfolio(NewPortfolio {
        balance: "1".into(),
        ..NewPortfolio::default()
    });
    let tx = store.create_transaction(NewTransaction::new(
        "0xdef",
        TransactionKind::Send,
        TransactionStatus::Pending,
    ));
    let crm = store.create_crm_integration(NewCrmIntegration::new("HubSpot"));

    assert_eq!(wallet.user_id, None);
    assert!(!wallet.connected);
    assert_eq!(token.logo_url, None);
    assert_eq!(entry.wallet_id, None);
    assert_eq!(entry.value_usd, None);
    assert_eq!(tx.wallet_id, None);
    assert_eq!(tx.amount, None);
    assert_eq!(tx.gas_used, None);
    assert!(!crm.connected);
    assert_eq!(crm.api_key, None);
    assert_eq!(crm.last_sync, None);
}

#[test]
fn partial_update_changes_only_given_fields() {
    let store = MemoryStore::new();
    let wallet = store.create_wallet(NewWallet::new("0xABC").owned_by(UserId::new(7)));

    let updated = store.update_wallet(
        wallet.id,
        WalletPatch {
            connected: Some(true),
            ..WalletPatch::default()
        },
    );

    let after = store.get_wallet(wallet.id).unwrap();
    assert!(updated);
    assert!(after.connected);
    assert_eq!(after.address, "0xABC");
    assert_eq!(after.user_id, Some(UserId::new(7)));
    assert_eq!(after.created_at, wallet.created_at);
}

#[test]
fn user_patch_keeps_password() {
    let store = MemoryStore::new();
    let user = store.create_user(NewUser::new("alice", "secret"));

    assert!(store.update_user(
        user.id,
        UserPatch {
            username: Some("alice2".into()),
            ..UserPatch::default()
        },
    ));

    let after = store.get_user(user.id).unwrap();
    assert_eq!(after.username, "alice2");
    assert_eq!(after.password, "secret");
    assert_eq!(after.id, user.id);
}

#[test]
fn token_patch_keeps_other_fields() {
    let store = MemoryStore::new();
    let token = store.create_token(NewToken::new("WBTC", "Wrapped Bitcoin", "0x2260", 8));

    assert!(store.update_token(
        token.id,
        TokenPatch {
            name: Some("Wrapped BTC".into()),
            logo_url: Some(Some("https://logo/wbtc.png".into())),
            ..TokenPatch::default()
        },
    ));

    let after = store.get_token(token.id).unwrap();
    assert_eq!(after.name, "Wrapped BTC");
    assert_eq!(after.logo_url.as_deref(), Some("https://logo/wbtc.png"));
    assert_eq!(after.symbol, "WBTC");
    assert_eq!(after.address, "0x2260");
    assert_eq!(after.decimals, 8);
}

#[test]
fn transaction_patch_keeps_fields_and_timestamp() {
    let store = MemoryStore::new();
    let mut record = pending_swap("0xabc", WalletId::new(3)).between("ETH", "USDC");
    record.amount = Some("1.5".into());
    let tx = store.create_transaction(record);

    assert!(store.update_transaction(
        tx.id,
        TransactionPatch {
            status: Some(TransactionStatus::Success),
            gas_used: Some(Some("4.20".into())),
            ..TransactionPatch::default()
        },
    ));

    let after = store.get_transaction(tx.id).unwrap();
    assert_eq!(after.status, TransactionStatus::Success);
    assert_eq!(after.gas_used.as_deref(), Some("4.20"));
    assert_eq!(after.hash, "0xabc");
    assert_eq!(after.kind, TransactionKind::Swap);
    assert_eq!(after.wallet_id, Some(WalletId::new(3)));
    assert_eq!(after.from_token.as_deref(), Some("ETH"));
    assert_eq!(after.to_token.as_deref(), Some("USDC"));
    assert_eq!(after.amount.as_deref(), Some("1.5"));
    assert_eq!(after.timestamp, tx.timestamp);
}

#[test]
fn nullable_fields_can_be_cleared() {
    let store = MemoryStore::new();
    let wallet = store.create_wallet(NewWallet::new("0xABC").owned_by(UserId::new(1)));

    store.update_wallet(
        wallet.id,
        WalletPatch {
            user_id: Some(None),
            ..WalletPatch::default()
        },
    );

    assert_eq!(store.get_wallet(wallet.id).unwrap().user_id, None);
}

#[test]
fn portfolio_update_restamps_forward() {
    let store = MemoryStore::new();
    let entry = store.create_portfolio(NewPortfolio::new(WalletId::new(1), TokenId::new(1), "1.0"));

    assert!(store.update_portfolio(
        entry.id,
        PortfolioPatch {
            balance: Some("2.5".into()),
            ..PortfolioPatch::default()
        },
    ));

    let after = store.get_portfolio(entry.id).unwrap();
    assert_eq!(after.balance, "2.5");
    assert_eq!(after.token_id, Some(TokenId::new(1)));
    assert!(after.updated_at >= entry.updated_at);
}

#[test]
fn crm_update_stamps_last_sync() {
    let store = MemoryStore::new();
    let crm = store.create_crm_integration(NewCrmIntegration::new("Salesforce").connected(true));

    assert!(store.update_crm_integration(crm.id, CrmIntegrationPatch::default()));
    let first = store.get_crm_integration(crm.id).unwrap().last_sync.unwrap();

    store.update_crm_integration(crm.id, CrmIntegrationPatch::default());
    let second = store.get_crm_integration(crm.id).unwrap().last_sync.unwrap();

    assert!(second >= first);
    assert_eq!(store.get_crm_integration(crm.id).unwrap().provider, "Salesforce");
}

#[test]
fn transactions_list_newest_first() {
    let store = MemoryStore::new();
    let wallet = store.create_wallet(NewWallet::new("0xABC"));

    store.create_transaction(pending_swap("t1", wallet.id));
    store.create_transaction(pending_swap("t2", wallet.id));
    store.create_transaction(pending_swap("t3", wallet.id));
    store.create_transaction(pending_swap("other", WalletId::new(99)));

    let hashes: Vec<_> = store
        .get_transactions_by_wallet_id(wallet.id)
        .into_iter()
        .map(|tx| tx.hash)
        .collect();
    assert_eq!(hashes, ["t3", "t2", "t1"]);
}

#[test]
fn missing_keys_read_as_none() {
    let store = MemoryStore::with_default_tokens();

    assert!(store.get_user(UserId::new(1)).is_none());
    assert!(store.get_user_by_username("nobody").is_none());
    assert!(store.get_wallet_by_address("0xnope").is_none());
    assert!(store.get_token_by_symbol("DOGE").is_none());
    assert!(store.get_transaction_by_hash("0xnope").is_none());
    assert!(store.get_crm_integration(CrmIntegrationId::new(1)).is_none());
    assert!(store.get_portfolio_by_wallet_id(WalletId::new(1)).is_empty());
}

#[test]
fn updates_on_missing_records_report_false() {
    let store = MemoryStore::new();
    let tx = store.create_transaction(pending_swap("0xdef", WalletId::new(1)));

    assert!(!store.update_user(UserId::new(5), UserPatch::default()));
    assert!(!store.update_token(TokenId::new(9), TokenPatch::default()));
    assert!(!store.update_wallet_connection("0xnope", true));
    assert!(!store.update_transaction_status("0xnope", TransactionStatus::Success));
    assert!(!store.update_crm_integration(CrmIntegrationId::new(3), CrmIntegrationPatch::default()));

    let unchanged = store.get_transaction(tx.id).unwrap();
    assert_eq!(unchanged.status, TransactionStatus::Pending);
    assert_eq!(store.counts(), [0, 0, 0, 0, 1, 0]);
}

#[test]
fn swap_status_settles_through_hash() {
    let store = MemoryStore::new();
    let wallet = store.create_wallet(NewWallet::new("0xABC"));
    store.create_transaction(pending_swap("0xdef", wallet.id));

    assert!(store.update_transaction_status("0xdef", TransactionStatus::Success));

    let listed = store.get_transactions_by_wallet_id(wallet.id);
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].hash, "0xdef");
    assert_eq!(listed[0].kind, TransactionKind::Swap);
    assert_eq!(listed[0].status, TransactionStatus::Success);
}

#[test]
fn tokens_resolve_by_symbol_in_creation_order() {
    let store = MemoryStore::new();
    store.create_token(NewToken::new("ETH", "Ethereum", "0xeeee", 18));
    store.create_token(NewToken::new("USDC", "USD Coin", "0xa0b8", 6));
    store.create_token(NewToken::new("UNI", "Uniswap", "0x1f98", 18));

    let usdc = store.get_token_by_symbol("USDC").unwrap();
    assert_eq!(usdc.name, "USD Coin");
    assert_eq!(usdc.decimals, 6);

    let symbols: Vec<_> = store
        .get_all_tokens()
        .into_iter()
        .map(|t| t.symbol)
        .collect();
    assert_eq!(symbols, ["ETH", "USDC", "UNI"]);
}

#[test]
fn duplicate_keys_are_accepted_and_earliest_wins() {
    let store = MemoryStore::new();
    let first = store.create_wallet(NewWallet::new("0xABC"));
    let second = store.create_wallet(NewWallet::new("0xABC"));
    store.create_transaction(pending_swap("0xdup", first.id));
    store.create_transaction(pending_swap("0xdup", second.id));

    assert_ne!(first.id, second.id);
    assert_eq!(store.get_wallet_by_address("0xABC").unwrap().id, first.id);
    assert_eq!(
        store.get_transaction_by_hash("0xdup").unwrap().wallet_id,
        Some(first.id)
    );

    // Connection updates also land on the earliest match.
    store.update_wallet_connection("0xABC", true);
    assert!(store.get_wallet(first.id).unwrap().connected);
    assert!(!store.get_wallet(second.id).unwrap().connected);
}

#[test]
fn lists_filter_by_owner() {
    let store = MemoryStore::new();
    store.create_wallet(NewWallet::new("0x1").owned_by(UserId::new(1)));
    store.create_wallet(NewWallet::new("0x2").owned_by(UserId::new(2)));
    store.create_wallet(NewWallet::new("0x3").owned_by(UserId::new(1)));
    store.create_crm_integration(NewCrmIntegration::new("HubSpot").for_user(UserId::new(2)));

    let addresses: Vec<_> = store
        .get_wallets_by_user_id(UserId::new(1))
        .into_iter()
        .map(|w| w.address)
        .collect();
    assert_eq!(addresses, ["0x1", "0x3"]);
    assert_eq!(store.get_crm_integrations_by_user_id(UserId::new(2)).len(), 1);
    assert!(store.get_crm_integrations_by_user_id(UserId::new(1)).is_empty());
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    let store = Arc::new(MemoryStore::new());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|i| {
                        store
                            .create_transaction(pending_swap(&format!("0x{t}-{i}"), WalletId::new(1)))
                            .id
                            .value()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();

    let expected: Vec<u64> = (1..=(threads * per_thread) as u64).collect();
    assert_eq!(ids, expected);
}
