use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::property_dto::CreatePropertyRequest;
use cresthaven_primitives::models::entities::property::Property;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/manager/properties",
    request_body = CreatePropertyRequest,
    responses(
        (status = 201, description = "Property listed"),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Caller is not a manager")
    ),
    security(("bearerAuth" = [])),
    tag = "Properties"
)]
pub async fn create_property(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreatePropertyRequest>,
) -> Result<(StatusCode, Json<Property>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let property = PropertyService::create_property(&state, &claims, req).await?;

    Ok((StatusCode::CREATED, Json(property)))
}
