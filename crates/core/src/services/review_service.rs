use crate::app_state::AppState;
use crate::repositories::property_repository::PropertyRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::security::Claims;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::review_dto::CreateReviewRequest;
use cresthaven_primitives::models::entities::review::{NewReview, Review};
use tracing::error;
use uuid::Uuid;

pub struct ReviewService;

impl ReviewService {
    pub async fn create_review(
        state: &AppState,
        claims: &Claims,
        req: CreateReviewRequest,
    ) -> Result<Review, ApiError> {
        let user_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("review.create: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        if !PropertyRepository::exists(&mut conn, req.property_id)? {
            return Err(ApiError::NotFound("Property does not exist".into()));
        }

        if ReviewRepository::user_reviewed(&mut conn, req.property_id, user_id)? {
            return Err(ApiError::Conflict(
                "You have already reviewed this property".into(),
            ));
        }

        ReviewRepository::create(
            &mut conn,
            NewReview {
                property_id: req.property_id,
                user_id,
                rating: req.rating,
                comment: req.comment.as_deref(),
            },
        )
    }

    pub async fn list_for_property(
        state: &AppState,
        property_id: Uuid,
    ) -> Result<Vec<Review>, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("review.list: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        ReviewRepository::list_by_property(&mut conn, property_id)
    }
}
