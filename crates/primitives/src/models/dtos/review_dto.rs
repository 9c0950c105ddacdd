use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateReviewRequest {
    pub property_id: Uuid,

    #[validate(range(min = 1, max = 5))]
    pub rating: i32,

    #[validate(length(max = 4000))]
    pub comment: Option<String>,
}
