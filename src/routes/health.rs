use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::{info, warn};

use crate::services::cache_gateway::GatewayStats;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/ready", get(ready))
}

async fn health() -> &'static str {
    info!("GET /health - Health check");
    "OK"
}

#[derive(Debug, Serialize)]
struct Readiness {
    cache_store: bool,
    cache_ttl_secs: u64,
    gateway: GatewayStats,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let cache_store = match state.gateway.store().health_check().await {
        Ok(ok) => ok,
        Err(e) => {
            warn!("Cache store health check failed: {}", e);
            false
        }
    };

    let status = if cache_store {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(Readiness {
            cache_store,
            cache_ttl_secs: state.gateway.ttl().as_secs(),
            gateway: state.gateway.stats(),
        }),
    )
}
