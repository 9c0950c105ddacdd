use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

/// Query parameters of the payment callback surface. The real flow carries
/// `reference`; the mock flow carries `status=success` and no reference.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyQuery {
    pub booking_id: Uuid,
    pub reference: Option<String>,
    pub status: Option<String>,
}
