//! Funding gauge handlers
//!
//! Endpoint for the aggregated pledge total.

use axum::{extract::State, Json};
use fund_service::{FundingResponse, FundingService};

use crate::state::AppState;

/// Get the current funding snapshot
///
/// GET /funding
pub async fn get_funding(State(state): State<AppState>) -> Json<FundingResponse> {
    let service = FundingService::new(state.service_context());
    Json(service.funding().await)
}
