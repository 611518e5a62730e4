//! Router assembly and the listener loop.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers;
use crate::application::AppState;
use crate::error::Result;
use crate::infrastructure::config::server::ServerConfig;

/// CORS policy for the configured origins. No origins means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// The full API router with CORS and request tracing applied.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/prices", get(handlers::get_prices))
        // Portfolio
        .route("/api/portfolio/overview", post(handlers::portfolio_overview))
        .route("/api/portfolio/sync", post(handlers::portfolio_sync))
        .route(
            "/api/portfolio/chart/:timeframe",
            get(handlers::portfolio_chart),
        )
        .route("/api/portfolio/holdings", get(handlers::portfolio_holdings))
        // Wallets and tokens
        .route("/api/wallet/balances", post(handlers::wallet_balances))
        .route("/api/wallet/connect", post(handlers::wallet_connect))
        .route("/api/wallet/disconnect", post(handlers::wallet_disconnect))
        .route("/api/tokens", get(handlers::list_tokens))
        // Swaps and history
        .route(
            "/api/swap/quote/:from/:to/:amount",
            get(handlers::swap_quote),
        )
        .route("/api/swap/execute", post(handlers::swap_execute))
        .route("/api/transactions", get(handlers::list_transactions))
        .route(
            "/api/transactions/:hash/status",
            post(handlers::transaction_status),
        )
        // CRM
        .route("/api/crm/status", get(handlers::crm_status))
        .route("/api/crm/integrations", get(handlers::crm_integrations))
        .route("/api/crm/connect", post(handlers::crm_connect))
        .route("/api/crm/:id/sync", post(handlers::crm_sync))
        .route("/api/blockchain/metrics", get(handlers::blockchain_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

/// Bind `config.address()` and serve until Ctrl-C or SIGTERM.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let app = router(state, config);
    let address = config.address();

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!(address = %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C"),
        () = terminate => info!("Received SIGTERM"),
    }
    info!("Shutting down");
}
