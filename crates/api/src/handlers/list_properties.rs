use axum::extract::{Json, Query, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::property_dto::PropertyFilter;
use cresthaven_primitives::models::entities::property::Property;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/api/properties",
    params(PropertyFilter),
    responses(
        (status = 200, description = "Available properties matching the filter")
    ),
    tag = "Properties"
)]
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PropertyFilter>,
) -> Result<Json<Vec<Property>>, ApiError> {
    let properties = PropertyService::list_properties(&state, filter).await?;

    Ok(Json(properties))
}
