use axum::extract::{Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::property::Property;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/properties/{property_id}",
    params(("property_id" = String, Path, description = "Property id or slug")),
    responses(
        (status = 200, description = "The property"),
        (status = 404, description = "Property does not exist")
    ),
    tag = "Properties"
)]
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(id_or_slug): Path<String>,
) -> Result<Json<Property>, ApiError> {
    let property = PropertyService::get_property(&state, &id_or_slug).await?;

    Ok(Json(property))
}
