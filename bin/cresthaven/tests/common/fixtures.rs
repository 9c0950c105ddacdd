use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use chrono::{NaiveDate, Utc};
use cresthaven_core::security::Claims;
use cresthaven_primitives::models::entities::enum_types::{
    BillingPeriod, BookingStatus, CurrencyCode, PropertyStatus, PropertyType, UserRole,
};
use diesel::prelude::*;
use uuid::Uuid;

#[allow(dead_code)]
pub fn claims_for(user_id: Uuid, role: UserRole) -> Claims {
    let now = Utc::now();
    Claims {
        sub: user_id.to_string(),
        role,
        iat: now.timestamp(),
        exp: now.timestamp() + 3600,
        iss: "cresthaven".to_string(),
        aud: "cresthaven_api".to_string(),
        jti: Uuid::new_v4().to_string(),
    }
}

#[allow(dead_code)]
pub fn insert_user(conn: &mut PgConnection, role: UserRole) -> Uuid {
    use cresthaven_primitives::schema::users;

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(b"SecurePass123", &salt)
        .unwrap()
        .to_string();

    diesel::insert_into(users::table)
        .values((
            users::email.eq(format!("test_{}@example.com", Uuid::new_v4())),
            users::password_hash.eq(hash),
            users::role.eq(role),
        ))
        .returning(users::id)
        .get_result::<Uuid>(conn)
        .unwrap()
}

/// A per-night property so expected totals are plain nights * rate.
#[allow(dead_code)]
pub fn insert_property(conn: &mut PgConnection, manager_id: Uuid, nightly_rate: i64) -> Uuid {
    use cresthaven_primitives::schema::properties;

    diesel::insert_into(properties::table)
        .values((
            properties::manager_id.eq(manager_id),
            properties::title.eq("Harbour Loft"),
            properties::slug.eq(format!("harbour-loft-{}", Uuid::new_v4().simple())),
            properties::description.eq("Two-bedroom loft above the marina."),
            properties::property_type.eq(PropertyType::Apartment),
            properties::address.eq("12 Quay Street"),
            properties::city.eq("Accra"),
            properties::country.eq("Ghana"),
            properties::bedrooms.eq(2),
            properties::bathrooms.eq(1),
            properties::price_per_month.eq(nightly_rate),
            properties::currency.eq(CurrencyCode::USD),
            properties::billing_period.eq(BillingPeriod::PerNight),
            properties::amenities.eq(serde_json::json!(["wifi"])),
            properties::status.eq(PropertyStatus::Available),
        ))
        .returning(properties::id)
        .get_result::<Uuid>(conn)
        .unwrap()
}

#[allow(dead_code)]
pub fn insert_booking(
    conn: &mut PgConnection,
    property_id: Uuid,
    user_id: Uuid,
    status: BookingStatus,
    check_in: NaiveDate,
    check_out: NaiveDate,
    total_price: i64,
) -> Uuid {
    use cresthaven_primitives::schema::bookings;

    diesel::insert_into(bookings::table)
        .values((
            bookings::property_id.eq(property_id),
            bookings::user_id.eq(user_id),
            bookings::check_in.eq(check_in),
            bookings::check_out.eq(check_out),
            bookings::guests.eq(2),
            bookings::total_price.eq(total_price),
            bookings::currency.eq(CurrencyCode::USD),
            bookings::status.eq(status),
        ))
        .returning(bookings::id)
        .get_result::<Uuid>(conn)
        .unwrap()
}

#[allow(dead_code)]
pub fn booking_status(conn: &mut PgConnection, booking_id: Uuid) -> BookingStatus {
    use cresthaven_primitives::schema::bookings;

    bookings::table
        .find(booking_id)
        .select(bookings::status)
        .first::<BookingStatus>(conn)
        .unwrap()
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
