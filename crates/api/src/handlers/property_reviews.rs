use axum::extract::{Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::review_service::ReviewService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::review::Review;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/properties/{property_id}/reviews",
    params(("property_id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Reviews for the property, newest first")
    ),
    tag = "Reviews"
)]
pub async fn property_reviews(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let reviews = ReviewService::list_for_property(&state, property_id).await?;

    Ok(Json(reviews))
}
