use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::booking_service::BookingService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::booking_dto::UpdateBookingStatusRequest;
use cresthaven_primitives::models::entities::booking::Booking;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    patch,
    path = "/api/bookings/{booking_id}/status",
    params(("booking_id" = Uuid, Path, description = "Booking id")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Booking moved along the status lattice"),
        (status = 403, description = "Actor is neither manager nor administrator"),
        (status = 404, description = "Booking does not exist"),
        (status = 409, description = "Transition violates the status lattice")
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
    Json(req): Json<UpdateBookingStatusRequest>,
) -> Result<Json<Booking>, ApiError> {
    let booking = BookingService::update_status(&state, &claims, booking_id, req.status).await?;

    Ok(Json(booking))
}
