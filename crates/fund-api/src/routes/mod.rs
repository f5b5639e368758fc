//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{cheers, funding, health, live, pledges, theme};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately so probes skip the API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(funding_routes())
        .merge(cheer_routes())
        .merge(pledge_routes())
        .merge(theme_routes())
        .merge(live_routes())
}

/// Funding gauge routes
fn funding_routes() -> Router<AppState> {
    Router::new().route("/funding", get(funding::get_funding))
}

/// Cheer wall routes
fn cheer_routes() -> Router<AppState> {
    Router::new()
        .route("/cheers", get(cheers::get_cheers))
        .route("/cheers", post(cheers::create_cheer))
}

/// Checkout routes
fn pledge_routes() -> Router<AppState> {
    Router::new()
        .route("/pledges", post(pledges::create_pledge))
        .route("/pledges/:payment_id/confirm", post(pledges::confirm_pledge))
}

/// Theme preference routes
fn theme_routes() -> Router<AppState> {
    Router::new()
        .route("/theme", get(theme::get_theme))
        .route("/theme", put(theme::update_theme))
}

/// Live update routes
fn live_routes() -> Router<AppState> {
    Router::new().route("/live", get(live::live_updates))
}
