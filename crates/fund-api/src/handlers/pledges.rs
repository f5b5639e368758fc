//! Checkout handlers
//!
//! Endpoints for submitting pledges and confirming deferred payments.

use axum::{
    extract::{Path, State},
    Json,
};
use fund_service::{CheckoutService, CreatePledgeRequest, PledgeResponse};

use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Submit a pledge through checkout
///
/// POST /pledges
pub async fn create_pledge(
    State(state): State<AppState>,
    Json(request): Json<CreatePledgeRequest>,
) -> ApiResult<Created<Json<PledgeResponse>>> {
    let service = CheckoutService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}

/// Confirm a pending bank transfer
///
/// POST /pledges/{payment_id}/confirm
pub async fn confirm_pledge(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> ApiResult<Json<PledgeResponse>> {
    if payment_id.trim().is_empty() {
        return Err(ApiError::invalid_path("payment_id must not be empty"));
    }

    let service = CheckoutService::new(state.service_context());
    let response = service.confirm(&payment_id).await?;
    Ok(Json(response))
}
