use axum::extract::{Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::auth_service::login::LoginService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::auth_dto::{LoginRequest, LoginResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = LoginService::login(&state, req.normalize()).await?;

    Ok(Json(response))
}
