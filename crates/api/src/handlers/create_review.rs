use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::review_service::ReviewService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::review_dto::CreateReviewRequest;
use cresthaven_primitives::models::entities::review::Review;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review recorded"),
        (status = 404, description = "Property does not exist"),
        (status = 409, description = "Caller already reviewed the property")
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let review = ReviewService::create_review(&state, &claims, req).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
