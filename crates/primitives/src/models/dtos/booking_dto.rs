use crate::models::entities::enum_types::BookingStatus;
use chrono::NaiveDate;
use diesel::Queryable;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateBookingRequest {
    pub property_id: Uuid,

    #[schema(example = "2025-06-01")]
    pub check_in: NaiveDate,

    #[schema(example = "2025-06-05")]
    pub check_out: NaiveDate,

    #[validate(range(min = 1, max = 16))]
    pub guests: i32,

    /// Expected total in minor units; the server recomputes the
    /// authoritative amount and rejects a disagreeing value.
    #[validate(range(min = 0))]
    pub total_price: i64,

    #[validate(length(max = 2000))]
    pub message: Option<String>,

    #[validate(length(min = 7, max = 32))]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Queryable, Serialize, ToSchema)]
pub struct BookingDatesDto {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}
