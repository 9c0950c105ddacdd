use cresthaven_core::services::booking_service::BookingService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::booking_dto::CreateBookingRequest;
use cresthaven_primitives::models::entities::enum_types::{BookingStatus, UserRole};
use serial_test::serial;

mod common;

use common::fixtures::{
    booking_status, claims_for, date, insert_booking, insert_property, insert_user,
};

fn booking_request(property_id: uuid::Uuid, total_price: i64) -> CreateBookingRequest {
    CreateBookingRequest {
        property_id,
        check_in: date(2025, 6, 1),
        check_out: date(2025, 6, 5),
        guests: 2,
        total_price,
        message: Some("Looking forward to the stay".to_string()),
        phone: Some("+233201234567".to_string()),
    }
}

#[tokio::test]
#[serial]
async fn create_booking_starts_pending() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);

    let booking = BookingService::create_booking(
        &state,
        &claims_for(resident, UserRole::Resident),
        booking_request(property, 4 * 20_000),
    )
    .await
    .unwrap();

    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.total_price, 80_000);
    assert_eq!(booking.user_id, resident);
}

#[tokio::test]
#[serial]
async fn create_booking_rejects_disagreeing_total() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);

    let err = BookingService::create_booking(
        &state,
        &claims_for(resident, UserRole::Resident),
        booking_request(property, 80_000 - 1),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
#[serial]
async fn create_booking_rejects_inverted_dates() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);

    let mut req = booking_request(property, 80_000);
    req.check_in = date(2025, 6, 5);
    req.check_out = date(2025, 6, 1);

    let err = BookingService::create_booking(
        &state,
        &claims_for(resident, UserRole::Resident),
        req,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
#[serial]
async fn create_booking_rejects_missing_property() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let resident = insert_user(conn, UserRole::Resident);

    let err = BookingService::create_booking(
        &state,
        &claims_for(resident, UserRole::Resident),
        booking_request(uuid::Uuid::new_v4(), 80_000),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
#[serial]
async fn overlapping_dates_are_rejected() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident_a = insert_user(conn, UserRole::Resident);
    let resident_b = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);

    insert_booking(
        conn,
        property,
        resident_a,
        BookingStatus::Confirmed,
        date(2025, 6, 3),
        date(2025, 6, 8),
        100_000,
    );

    let err = BookingService::create_booking(
        &state,
        &claims_for(resident_b, UserRole::Resident),
        booking_request(property, 80_000),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
}

#[tokio::test]
#[serial]
async fn manager_confirms_then_payment_is_noop() {
    // Scenario from the checkout flow: manager approval first, payment
    // verification after; the second confirmation must not error.
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);
    let booking = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Pending,
        date(2025, 6, 1),
        date(2025, 6, 5),
        80_000,
    );

    let updated = BookingService::update_status(
        &state,
        &claims_for(manager, UserRole::PropertyManager),
        booking,
        BookingStatus::Confirmed,
    )
    .await
    .unwrap();
    assert_eq!(updated.status, BookingStatus::Confirmed);

    let confirmed = BookingService::mark_confirmed_by_payment(&state, booking)
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn payment_confirmation_is_idempotent() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);
    let booking = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Pending,
        date(2025, 6, 1),
        date(2025, 6, 5),
        80_000,
    );

    let first = BookingService::mark_confirmed_by_payment(&state, booking)
        .await
        .unwrap();
    let second = BookingService::mark_confirmed_by_payment(&state, booking)
        .await
        .unwrap();

    assert_eq!(first.status, BookingStatus::Confirmed);
    assert_eq!(second.status, BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn cancelled_booking_is_not_resurrected_by_payment() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);
    let booking = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Cancelled,
        date(2025, 6, 1),
        date(2025, 6, 5),
        80_000,
    );

    let err = BookingService::mark_confirmed_by_payment(&state, booking)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Conflict(_)));
    assert_eq!(booking_status(conn, booking), BookingStatus::Cancelled);
}

#[tokio::test]
#[serial]
async fn stranger_cannot_update_status() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let stranger = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);
    let booking = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Pending,
        date(2025, 6, 1),
        date(2025, 6, 5),
        80_000,
    );

    let err = BookingService::update_status(
        &state,
        &claims_for(stranger, UserRole::Resident),
        booking,
        BookingStatus::Cancelled,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
    assert_eq!(booking_status(conn, booking), BookingStatus::Pending);
}

#[tokio::test]
#[serial]
async fn admin_may_override_any_booking() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let admin = insert_user(conn, UserRole::SuperAdmin);
    let property = insert_property(conn, manager, 20_000);
    let booking = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Pending,
        date(2025, 6, 1),
        date(2025, 6, 5),
        80_000,
    );

    let updated = BookingService::update_status(
        &state,
        &claims_for(admin, UserRole::SuperAdmin),
        booking,
        BookingStatus::Cancelled,
    )
    .await
    .unwrap();

    assert_eq!(updated.status, BookingStatus::Cancelled);
}

#[tokio::test]
#[serial]
async fn lattice_rejects_backward_transitions() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let property = insert_property(conn, manager, 20_000);

    let cancelled = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Cancelled,
        date(2025, 6, 1),
        date(2025, 6, 5),
        80_000,
    );
    let confirmed = insert_booking(
        conn,
        property,
        resident,
        BookingStatus::Confirmed,
        date(2025, 7, 1),
        date(2025, 7, 5),
        80_000,
    );

    let claims = claims_for(manager, UserRole::PropertyManager);

    let err = BookingService::update_status(&state, &claims, cancelled, BookingStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    let err = BookingService::update_status(&state, &claims, confirmed, BookingStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Conflict(_)));

    assert_eq!(booking_status(conn, cancelled), BookingStatus::Cancelled);
    assert_eq!(booking_status(conn, confirmed), BookingStatus::Confirmed);
}
