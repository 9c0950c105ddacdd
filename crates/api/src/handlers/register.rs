use axum::extract::{Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::auth_service::register::RegisterService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::auth_dto::{RegisterRequest, RegisterResponse};
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = RegisterResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let req = req.normalize();

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = RegisterService::register(&state, req).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
