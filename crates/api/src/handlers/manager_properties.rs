use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::property::Property;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/manager/properties",
    responses(
        (status = 200, description = "Properties managed by the caller"),
        (status = 401)
    ),
    security(("bearerAuth" = [])),
    tag = "Properties"
)]
pub async fn manager_properties(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = PropertyService::list_by_manager(&state, &claims).await?;

    Ok(Json(properties))
}
