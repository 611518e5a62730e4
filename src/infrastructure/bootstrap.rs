//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::blockscout::BlockscoutClient;
use crate::adapter::outbound::coingecko::CoinGeckoClient;
use crate::adapter::outbound::http::JsonHttp;
use crate::adapter::outbound::memory::MemoryStore;
use crate::adapter::outbound::oneinch::OneInchClient;
use crate::application::AppState;
use crate::infrastructure::config::settings::Config;
use crate::port::Storage;

/// Build the store from the `[storage]` section.
pub fn build_store(config: &Config) -> Arc<dyn Storage> {
    let store = if config.storage.seed_default_tokens {
        MemoryStore::with_default_tokens()
    } else {
        MemoryStore::new()
    };
    let [users, wallets, tokens, portfolios, transactions, crm] = store.counts();
    info!(
        users,
        wallets,
        tokens,
        portfolios,
        transactions,
        crm,
        "Memory store ready"
    );
    Arc::new(store)
}

/// Wire the store and the upstream clients into an [`AppState`].
pub fn build_state(config: &Config) -> AppState {
    let upstream = &config.upstream;
    let http = JsonHttp::from_config(&upstream.http);

    let oracle = CoinGeckoClient::new(http.clone(), upstream.coingecko_url.as_str());
    let explorer = BlockscoutClient::new(http.clone(), upstream.blockscout_url.as_str());
    let swaps = OneInchClient::new(
        http,
        upstream.oneinch_url.as_str(),
        upstream.chain_id,
        upstream.oneinch_api_key.clone(),
    );
    info!(
        coingecko = %upstream.coingecko_url,
        blockscout = %upstream.blockscout_url,
        oneinch = %upstream.oneinch_url,
        chain_id = upstream.chain_id,
        oneinch_key = upstream.oneinch_api_key.is_some(),
        "Upstream clients configured"
    );

    AppState::new(
        build_store(config),
        Arc::new(oracle),
        Arc::new(explorer),
        Arc::new(swaps),
        config.dashboard.clone(),
    )
}
