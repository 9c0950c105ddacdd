use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::repositories::activity_log_repository::ActivityLogRepository;
use cresthaven_core::security::Claims;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::activity_log::ActivityLog;
use std::sync::Arc;
use tracing::error;

const RECENT_LOG_LIMIT: i64 = 100;

#[utoipa::path(
    get,
    path = "/api/admin/logs",
    responses(
        (status = 200, description = "Recent audit records"),
        (status = 403, description = "Administrator role required")
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn activity_logs(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<ActivityLog>>, ApiError> {
    if !claims.is_admin() {
        return Err(ApiError::Forbidden("Administrator role required".into()));
    }

    let mut conn = state.db.get().map_err(|e| {
        error!("DB connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let logs = ActivityLogRepository::list_recent(&mut conn, RECENT_LOG_LIMIT)?;

    Ok(Json(logs))
}
