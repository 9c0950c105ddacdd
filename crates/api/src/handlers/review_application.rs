use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::application_service::ApplicationService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::application_dto::ReviewApplicationRequest;
use cresthaven_primitives::models::entities::application::ManagerApplication;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    patch,
    path = "/api/admin/applications/{application_id}",
    params(("application_id" = Uuid, Path, description = "Application id")),
    request_body = ReviewApplicationRequest,
    responses(
        (status = 200, description = "Application decided"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Application does not exist"),
        (status = 409, description = "Application already decided")
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn review_application(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(application_id): Path<Uuid>,
    Json(req): Json<ReviewApplicationRequest>,
) -> Result<Json<ManagerApplication>, ApiError> {
    let application =
        ApplicationService::review(&state, &claims, application_id, req.status).await?;

    Ok(Json(application))
}
