use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::checkout_service::CheckoutService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::checkout_dto::CheckoutResponse;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/checkout/{booking_id}",
    params(("booking_id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Payment initialized", body = CheckoutResponse),
        (status = 403, description = "Not the booking's owner"),
        (status = 404, description = "Booking does not exist"),
        (status = 409, description = "Booking is cancelled"),
        (status = 502, description = "Payment provider unreachable")
    ),
    security(("bearerAuth" = [])),
    tag = "Checkout"
)]
pub async fn start_checkout(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let response = CheckoutService::start_checkout(&state, &claims, booking_id).await?;

    Ok(Json(response))
}
