use crate::models::entities::enum_types::{
    BillingPeriod, CurrencyCode, PropertyStatus, PropertyType,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 3, max = 200))]
    pub title: String,

    #[validate(length(min = 10, max = 10_000))]
    pub description: String,

    pub property_type: PropertyType,

    #[validate(length(min = 3))]
    pub address: String,

    #[validate(length(min = 1))]
    pub city: String,

    #[validate(length(min = 1))]
    pub country: String,

    #[validate(range(min = 0, max = 50))]
    pub bedrooms: i32,

    #[validate(range(min = 0, max = 50))]
    pub bathrooms: i32,

    #[validate(range(min = 1))]
    pub square_feet: Option<i32>,

    /// Rate in minor units, metered by `billing_period`.
    #[validate(range(min = 1))]
    pub price_per_month: i64,

    pub currency: Option<CurrencyCode>,
    pub billing_period: Option<BillingPeriod>,

    #[serde(default)]
    pub amenities: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePropertyStatusRequest {
    pub status: PropertyStatus,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub bedrooms: Option<i32>,
}
