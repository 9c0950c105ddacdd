use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SendMessageRequest {
    pub recipient_id: Uuid,

    pub property_id: Option<Uuid>,

    #[validate(length(min = 1, max = 4000))]
    pub body: String,
}
