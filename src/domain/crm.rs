//! CRM provider integrations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CrmIntegrationId, UserId};

/// A user's link to an external CRM (e.g. Salesforce, HubSpot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmIntegration {
    pub id: CrmIntegrationId,
    pub user_id: Option<UserId>,
    pub provider: String,
    #[serde(rename = "isConnected")]
    pub connected: bool,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub last_sync: Option<DateTime<Utc>>,
}

/// Insert payload for [`CrmIntegration`]. `last_sync` starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCrmIntegration {
    pub user_id: Option<UserId>,
    pub provider: String,
    pub connected: bool,
    pub api_key: Option<String>,
}

impl NewCrmIntegration {
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    #[must_use]
    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }
}

/// Partial update for [`CrmIntegration`]. The store stamps `last_sync`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrmIntegrationPatch {
    pub user_id: Option<Option<UserId>>,
    pub provider: Option<String>,
    pub connected: Option<bool>,
    pub api_key: Option<Option<String>>,
}

impl CrmIntegrationPatch {
    pub fn apply(self, integration: &mut CrmIntegration) {
        if let Some(user_id) = self.user_id {
            integration.user_id = user_id;
        }
        if let Some(provider) = self.provider {
            integration.provider = provider;
        }
        if let Some(connected) = self.connected {
            integration.connected = connected;
        }
        if let Some(api_key) = self.api_key {
            integration.api_key = api_key;
        }
    }
}
