use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::property_dto::CreatePropertyRequest;
use cresthaven_primitives::models::entities::property::Property;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    put,
    path = "/api/manager/properties/{property_id}",
    params(("property_id" = Uuid, Path, description = "Property id")),
    request_body = CreatePropertyRequest,
    responses(
        (status = 200, description = "Property updated"),
        (status = 403, description = "Not the property's manager"),
        (status = 404, description = "Property does not exist")
    ),
    security(("bearerAuth" = [])),
    tag = "Properties"
)]
pub async fn update_property(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(property_id): Path<Uuid>,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<Json<Property>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let property = PropertyService::update_property(&state, &claims, property_id, req).await?;

    Ok(Json(property))
}
