use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::booking_service::BookingService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::booking_dto::CreateBookingRequest;
use cresthaven_primitives::models::entities::booking::Booking;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created in PENDING state"),
        (status = 400, description = "Invalid dates or disagreeing total"),
        (status = 404, description = "Property does not exist"),
        (status = 409, description = "Dates no longer available")
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let booking = BookingService::create_booking(&state, &claims, req).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}
