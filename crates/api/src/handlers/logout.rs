use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::auth_service::logout::LogoutService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::auth_dto::LogoutResponse;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Session invalidated", body = LogoutResponse),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<LogoutResponse>, ApiError> {
    LogoutService::logout(&state, claims).await?;

    Ok(Json(LogoutResponse {
        message: "Successfully logged out".to_string(),
    }))
}
