use crate::models::entities::enum_types::{
    BillingPeriod, CurrencyCode, PropertyStatus, PropertyType,
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::properties)]
#[diesel(belongs_to(crate::models::entities::user::User, foreign_key = manager_id))]
pub struct Property {
    pub id: Uuid,
    pub manager_id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub property_type: PropertyType,
    pub address: String,
    pub city: String,
    pub country: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: Option<i32>,

    /// Rate in minor units of `currency`, metered by `billing_period`.
    pub price_per_month: i64,
    pub currency: CurrencyCode,
    pub billing_period: BillingPeriod,

    pub amenities: Value,
    pub status: PropertyStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full-field edit applied by the managing user; the slug is never
/// regenerated.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::properties)]
pub struct PropertyChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub property_type: PropertyType,
    pub address: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: Option<i32>,
    pub price_per_month: i64,
    pub currency: CurrencyCode,
    pub billing_period: BillingPeriod,
    pub amenities: Value,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::properties)]
pub struct NewProperty<'a> {
    pub manager_id: Uuid,
    pub title: &'a str,
    pub slug: &'a str,
    pub description: &'a str,
    pub property_type: PropertyType,
    pub address: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: Option<i32>,
    pub price_per_month: i64,
    pub currency: CurrencyCode,
    pub billing_period: BillingPeriod,
    pub amenities: Value,
    pub status: PropertyStatus,
}
