use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::property_dto::UpdatePropertyStatusRequest;
use cresthaven_primitives::models::entities::property::Property;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    patch,
    path = "/api/properties/{property_id}/status",
    params(("property_id" = Uuid, Path, description = "Property id")),
    request_body = UpdatePropertyStatusRequest,
    responses(
        (status = 200, description = "Property status updated"),
        (status = 403, description = "Not the property's manager"),
        (status = 404, description = "Property does not exist")
    ),
    security(("bearerAuth" = [])),
    tag = "Properties"
)]
pub async fn update_property_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(property_id): Path<Uuid>,
    Json(req): Json<UpdatePropertyStatusRequest>,
) -> Result<Json<Property>, ApiError> {
    let property =
        PropertyService::update_status(&state, &claims, property_id, req.status).await?;

    Ok(Json(property))
}
