//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub store: StoreHealthResponse,
}

#[derive(Debug, Serialize)]
pub struct StoreHealthResponse {
    pub backend: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redis: Option<RedisHealthResponse>,
}

#[derive(Debug, Serialize)]
pub struct RedisHealthResponse {
    pub status: String,
    pub last_connected_ms: i64,
    pub consecutive_failures: u32,
    pub total_failures: u32,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_healthy = state.store.is_healthy().await;

    let redis = state.redis_health.as_ref().map(|health| {
        let stats = health.stats();
        RedisHealthResponse {
            status: stats.status.as_str().to_string(),
            last_connected_ms: stats.last_connected_ms,
            consecutive_failures: stats.consecutive_failures,
            total_failures: stats.total_failures,
        }
    });

    let status = if store_healthy { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        store: StoreHealthResponse {
            backend: state.store.backend_type().as_str().to_string(),
            healthy: store_healthy,
            redis,
        },
    })
}
