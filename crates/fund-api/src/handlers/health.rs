//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use fund_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    // Pools are absent when the app is wired against in-memory stores;
    // a dependency that is not wired cannot be unhealthy.
    let db_healthy = match state.db_pool() {
        Some(pool) => pool.acquire().await.is_ok(),
        None => true,
    };

    let redis_healthy = match state.redis_pool() {
        Some(pool) => pool.health_check().await.is_ok(),
        None => true,
    };

    let response = ReadinessResponse::ready(db_healthy, redis_healthy);
    let status = if db_healthy && redis_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
