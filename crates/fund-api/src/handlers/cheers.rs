//! Cheer wall handlers
//!
//! Endpoints for reading and posting cheers.

use axum::{extract::State, Json};
use fund_service::{CheerResponse, CheerService, CreateCheerRequest};

use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get the latest cheers, newest first
///
/// GET /cheers
pub async fn get_cheers(State(state): State<AppState>) -> Json<Vec<CheerResponse>> {
    let service = CheerService::new(state.service_context());
    Json(service.feed().await)
}

/// Post a cheer
///
/// POST /cheers
pub async fn create_cheer(
    State(state): State<AppState>,
    Json(request): Json<CreateCheerRequest>,
) -> ApiResult<Created<Json<CheerResponse>>> {
    let service = CheerService::new(state.service_context());
    let response = service.post(request).await?;
    Ok(Created(Json(response)))
}
