use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::auth_service::user::UserService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::auth_dto::CurrentUserResponse;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/current_user",
    responses(
        (status = 200, body = CurrentUserResponse),
        (status = 401)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn current_user_details(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<CurrentUserResponse>, ApiError> {
    let user_id = claims.user_id()?;

    let response = UserService::current_user_summary(&state, user_id).await?;

    Ok(Json(response))
}
