use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::application_service::ApplicationService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::application::ManagerApplication;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/admin/applications",
    responses(
        (status = 200, description = "All manager applications, newest first"),
        (status = 403, description = "Administrator role required")
    ),
    security(("bearerAuth" = [])),
    tag = "Applications"
)]
pub async fn list_applications(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ManagerApplication>>, ApiError> {
    let applications = ApplicationService::list(&state, &claims).await?;

    Ok(Json(applications))
}
