use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use nexus_portfolio::adapter::inbound::http::router;
use nexus_portfolio::adapter::outbound::memory::MemoryStore;
use nexus_portfolio::application::AppState;
use nexus_portfolio::infrastructure::config::dashboard::DashboardConfig;
use nexus_portfolio::infrastructure::config::server::ServerConfig;

use super::fakes::{FakeAggregator, FakeExplorer, FakeOracle};

/// A state over a seeded store and the given fakes.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub aggregator: Arc<FakeAggregator>,
    pub state: AppState,
}

impl TestApp {
    pub fn new(oracle: FakeOracle, explorer: FakeExplorer, aggregator: FakeAggregator) -> Self {
        let store = Arc::new(MemoryStore::with_default_tokens());
        let aggregator = Arc::new(aggregator);
        let state = AppState::new(
            store.clone(),
            Arc::new(oracle),
            Arc::new(explorer),
            aggregator.clone(),
            DashboardConfig::default(),
        );
        Self {
            store,
            aggregator,
            state,
        }
    }

    /// Every upstream down.
    pub fn offline() -> Self {
        Self::new(
            FakeOracle::default(),
            FakeExplorer::default(),
            FakeAggregator::default(),
        )
    }

    pub fn router(&self) -> Router {
        router(self.state.clone(), &ServerConfig::default())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("build request");

        let response = self.router().oneshot(request).await.expect("route request");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, json)
    }
}
