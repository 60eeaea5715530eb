//! Liveness of the mock device
//!
//! Test suites poll this before sending configurations. The service answers
//! 200 whenever it is up; `store` tells whether the device state database
//! can currently be queried.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the store answers, `"degraded"` otherwise
    pub status: String,
    pub module: String,
    pub version: String,
    /// `"reachable"` or `"unreachable"`
    pub store: String,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_ok = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Device state store unreachable: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: if store_ok { "ok" } else { "degraded" }.to_string(),
        module: "iotv-sut".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if store_ok { "reachable" } else { "unreachable" }.to_string(),
    })
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
