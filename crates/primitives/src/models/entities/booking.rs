use crate::models::entities::enum_types::{BookingStatus, CurrencyCode};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// One reservation request against a property. Status only ever moves along
/// the lattice in [`BookingStatus`]; rows are never deleted by the service.
#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(belongs_to(crate::models::entities::property::Property))]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Booking {
    pub id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,

    /// Total in minor units of `currency`, recomputed server-side at creation.
    pub total_price: i64,
    pub currency: CurrencyCode,

    pub status: BookingStatus,
    pub message: Option<String>,
    pub phone: Option<String>,

    /// Reference of the most recently initialized payment attempt.
    pub payment_reference: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking<'a> {
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
    pub total_price: i64,
    pub currency: CurrencyCode,
    pub status: BookingStatus,
    pub message: Option<&'a str>,
    pub phone: Option<&'a str>,
}
