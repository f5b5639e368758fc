//! Theme preference handlers
//!
//! Endpoints for reading and updating the stored display theme.

use axum::{extract::State, Json};
use fund_service::{ThemeResponse, ThemeService, UpdateThemeRequest};

use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current theme
///
/// GET /theme
pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let service = ThemeService::new(state.service_context());
    Json(service.current().await)
}

/// Update the theme
///
/// PUT /theme
pub async fn update_theme(
    State(state): State<AppState>,
    Json(request): Json<UpdateThemeRequest>,
) -> ApiResult<Json<ThemeResponse>> {
    let service = ThemeService::new(state.service_context());
    let response = service.update(request).await?;
    Ok(Json(response))
}
