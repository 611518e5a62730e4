//! Shared application state.

use std::sync::Arc;

use crate::domain::{UserId, WalletId};
use crate::infrastructure::config::dashboard::DashboardConfig;
use crate::port::{BlockExplorer, PriceOracle, Storage, SwapAggregator};

/// Everything a use case needs: the store, the upstream ports and the
/// dashboard defaults. Cheap to clone; handlers receive one per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub oracle: Arc<dyn PriceOracle>,
    pub explorer: Arc<dyn BlockExplorer>,
    pub swaps: Arc<dyn SwapAggregator>,
    pub settings: DashboardConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Storage>,
        oracle: Arc<dyn PriceOracle>,
        explorer: Arc<dyn BlockExplorer>,
        swaps: Arc<dyn SwapAggregator>,
        settings: DashboardConfig,
    ) -> Self {
        Self {
            store,
            oracle,
            explorer,
            swaps,
            settings,
        }
    }

    /// User that owns requests which do not name one.
    #[must_use]
    pub fn default_user(&self) -> UserId {
        UserId::new(self.settings.default_user_id)
    }

    /// Wallet used by requests which do not pass an address.
    #[must_use]
    pub fn default_wallet(&self) -> WalletId {
        WalletId::new(self.settings.default_wallet_id)
    }
}
