//! CRM integrations of the default user.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::state::AppState;
use crate::domain::{CrmIntegration, CrmIntegrationId, CrmIntegrationPatch, NewCrmIntegration};
use crate::error::{Error, Result};

/// Sync summary shown next to the CRM panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrmStatus {
    /// Share of integrations currently connected, 0-100.
    pub sync_percentage: u32,
    pub connected_provider: Option<String>,
    pub last_sync: Option<DateTime<Utc>>,
}

pub fn list(state: &AppState) -> Vec<CrmIntegration> {
    state
        .store
        .get_crm_integrations_by_user_id(state.default_user())
}

pub fn status(state: &AppState) -> CrmStatus {
    let integrations = list(state);
    let connected: Vec<_> = integrations.iter().filter(|i| i.connected).collect();

    let sync_percentage = match integrations.len() {
        0 => 0,
        total => u32::try_from(connected.len() * 100 / total).unwrap_or(100),
    };
    let first = connected.first();

    CrmStatus {
        sync_percentage,
        connected_provider: first.map(|i| i.provider.clone()),
        last_sync: first.and_then(|i| i.last_sync),
    }
}

/// Register a connected integration with `provider` for the default user.
pub fn connect(state: &AppState, provider: &str, api_key: Option<String>) -> Result<CrmIntegration> {
    let provider = provider.trim();
    if provider.is_empty() {
        return Err(Error::InvalidInput("Provider is required".into()));
    }

    let mut integration = NewCrmIntegration::new(provider)
        .for_user(state.default_user())
        .connected(true);
    integration.api_key = api_key.filter(|key| !key.is_empty());

    let integration = state.store.create_crm_integration(integration);
    info!(integration_id = %integration.id, provider, "CRM connected");
    Ok(integration)
}

/// Stamp a sync on the integration.
pub fn sync(state: &AppState, id: u64) -> Result<CrmIntegration> {
    let id = CrmIntegrationId::new(id);
    if !state
        .store
        .update_crm_integration(id, CrmIntegrationPatch::default())
    {
        return Err(Error::NotFound(format!("CRM integration {id} not found")));
    }
    state
        .store
        .get_crm_integration(id)
        .ok_or_else(|| Error::NotFound(format!("CRM integration {id} not found")))
}
