use axum::extract::{Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::application_service::ApplicationService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::application_dto::SubmitApplicationRequest;
use cresthaven_primitives::models::entities::application::ManagerApplication;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/applications",
    request_body = SubmitApplicationRequest,
    responses(
        (status = 201, description = "Application received"),
        (status = 400, description = "Invalid input")
    ),
    tag = "Applications"
)]
pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SubmitApplicationRequest>,
) -> Result<(StatusCode, Json<ManagerApplication>), ApiError> {
    let req = req.normalize();

    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let application = ApplicationService::submit(&state, req).await?;

    Ok((StatusCode::CREATED, Json(application)))
}
