use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::repositories::booking_repository::BookingRepository;
use cresthaven_core::security::Claims;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::booking::Booking;
use std::sync::Arc;
use tracing::error;

#[utoipa::path(
    get,
    path = "/api/bookings",
    responses(
        (status = 200, description = "The caller's bookings, newest first"),
        (status = 401)
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let user_id = claims.user_id()?;

    let mut conn = state.db.get().map_err(|e| {
        error!("DB connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let bookings = BookingRepository::list_by_user(&mut conn, user_id)?;

    Ok(Json(bookings))
}
