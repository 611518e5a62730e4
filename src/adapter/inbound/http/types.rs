//! Request bodies and query strings accepted by the API.

use serde::Deserialize;

/// Body carrying a wallet address. A missing field reads as empty so the
/// service can reject it with a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAddressBody {
    #[serde(default)]
    pub wallet_address: String,
}

/// Optional `?walletAddress=` filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletQuery {
    pub wallet_address: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusBody {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmConnectBody {
    #[serde(default)]
    pub provider: String,
    pub api_key: Option<String>,
}
