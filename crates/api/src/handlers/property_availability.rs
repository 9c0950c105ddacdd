use axum::extract::{Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::property_service::PropertyService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::booking_dto::BookingDatesDto;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/availability",
    params(("property_id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Date ranges held by active bookings", body = [BookingDatesDto]),
        (status = 404, description = "Property does not exist")
    ),
    tag = "Properties"
)]
pub async fn property_availability(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<BookingDatesDto>>, ApiError> {
    let dates = PropertyService::occupied_dates(&state, property_id).await?;

    Ok(Json(dates))
}
