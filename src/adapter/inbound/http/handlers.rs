//! Route handlers. Each one unpacks the request, calls one application
//! service and wraps the result in JSON.

use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use super::types::{CrmConnectBody, StatusBody, WalletAddressBody, WalletQuery};
use crate::application::chain::{self, ChainMetrics};
use crate::application::chart::{self, ChartPoint, Timeframe};
use crate::application::crm::{self, CrmStatus};
use crate::application::portfolio::{self, Holding, PortfolioOverview};
use crate::application::prices::{self, SpotPrices};
use crate::application::swap::{self, Quote, SwapExecution, SwapOrder};
use crate::application::{transactions, wallet, AppState};
use crate::domain::{CrmIntegration, Token, Transaction, Wallet};
use crate::error::Result;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn get_prices(State(state): State<AppState>) -> Result<Json<SpotPrices>> {
    Ok(Json(prices::spot_prices(&state).await?))
}

pub async fn portfolio_overview(
    State(state): State<AppState>,
    Json(body): Json<WalletAddressBody>,
) -> Result<Json<PortfolioOverview>> {
    Ok(Json(portfolio::overview(&state, &body.wallet_address).await?))
}

pub async fn portfolio_sync(
    State(state): State<AppState>,
    Json(body): Json<WalletAddressBody>,
) -> Result<Json<Vec<Holding>>> {
    Ok(Json(portfolio::sync(&state, &body.wallet_address).await?))
}

pub async fn portfolio_chart(Path(timeframe): Path<String>) -> Json<Vec<ChartPoint>> {
    let timeframe = Timeframe::parse(&timeframe);
    Json(chart::series(timeframe, Utc::now(), &mut rand::thread_rng()))
}

pub async fn portfolio_holdings(
    State(state): State<AppState>,
    Query(query): Query<WalletQuery>,
) -> Result<Json<Vec<Holding>>> {
    Ok(Json(portfolio::holdings(
        &state,
        query.wallet_address.as_deref(),
    )?))
}

pub async fn wallet_balances(
    State(state): State<AppState>,
    Json(body): Json<WalletAddressBody>,
) -> Result<Json<BTreeMap<String, String>>> {
    Ok(Json(
        portfolio::wallet_balances(&state, &body.wallet_address).await?,
    ))
}

pub async fn wallet_connect(
    State(state): State<AppState>,
    Json(body): Json<WalletAddressBody>,
) -> Result<Json<Wallet>> {
    Ok(Json(wallet::connect(&state, &body.wallet_address)?))
}

pub async fn wallet_disconnect(
    State(state): State<AppState>,
    Json(body): Json<WalletAddressBody>,
) -> Result<Json<Wallet>> {
    Ok(Json(wallet::disconnect(&state, &body.wallet_address)?))
}

pub async fn list_tokens(State(state): State<AppState>) -> Json<Vec<Token>> {
    Json(wallet::list_tokens(&state))
}

pub async fn swap_quote(
    State(state): State<AppState>,
    Path((from, to, amount)): Path<(String, String, String)>,
) -> Result<Json<Quote>> {
    Ok(Json(swap::quote(&state, &from, &to, &amount).await?))
}

pub async fn swap_execute(
    State(state): State<AppState>,
    Json(order): Json<SwapOrder>,
) -> Result<Json<SwapExecution>> {
    Ok(Json(swap::execute(&state, order).await?))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<WalletQuery>,
) -> Json<Vec<Transaction>> {
    Json(transactions::list(&state, query.wallet_address.as_deref()))
}

pub async fn transaction_status(
    State(state): State<AppState>,
    Path(hash): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<Transaction>> {
    Ok(Json(transactions::set_status(&state, &hash, &body.status)?))
}

pub async fn crm_status(State(state): State<AppState>) -> Json<CrmStatus> {
    Json(crm::status(&state))
}

pub async fn crm_integrations(State(state): State<AppState>) -> Json<Vec<CrmIntegration>> {
    Json(crm::list(&state))
}

pub async fn crm_connect(
    State(state): State<AppState>,
    Json(body): Json<CrmConnectBody>,
) -> Result<Json<Value>> {
    let integration = crm::connect(&state, &body.provider, body.api_key)?;
    Ok(Json(json!({
        "message": format!("Successfully connected to {}", integration.provider),
        "integration": integration,
    })))
}

pub async fn crm_sync(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CrmIntegration>> {
    Ok(Json(crm::sync(&state, id)?))
}

pub async fn blockchain_metrics(State(state): State<AppState>) -> Result<Json<ChainMetrics>> {
    Ok(Json(chain::metrics(&state).await?))
}
