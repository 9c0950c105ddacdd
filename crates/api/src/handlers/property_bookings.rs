use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::repositories::booking_repository::BookingRepository;
use cresthaven_core::repositories::property_repository::PropertyRepository;
use cresthaven_core::security::Claims;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::booking::Booking;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/bookings",
    params(("property_id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Bookings against the property"),
        (status = 403, description = "Not the property's manager"),
        (status = 404, description = "Property does not exist")
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn property_bookings(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let actor_id = claims.user_id()?;

    let mut conn = state.db.get().map_err(|e| {
        error!("DB connection error: {}", e);
        ApiError::DatabaseConnection(e.to_string())
    })?;

    let manager_id = PropertyRepository::manager_of(&mut conn, property_id)?
        .ok_or_else(|| ApiError::NotFound("Property does not exist".into()))?;

    if actor_id != manager_id && !claims.is_admin() {
        return Err(ApiError::Forbidden(
            "Only the property's manager or an administrator may view its bookings".into(),
        ));
    }

    let bookings = BookingRepository::list_by_property(&mut conn, property_id)?;

    Ok(Json(bookings))
}
