use cresthaven_core::services::checkout_service::CheckoutService;
use cresthaven_core::services::paystack_service::PaystackService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::app_state::paystack_details::PaymentMode;
use cresthaven_primitives::models::dtos::providers::paystack::{
    PaystackWebhook, PaystackWebhookData,
};
use cresthaven_primitives::models::entities::enum_types::{BookingStatus, UserRole};
use diesel::prelude::*;
use secrecy::SecretString;
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::fixtures::{booking_status, claims_for, date, insert_booking, insert_property, insert_user};

#[tokio::test]
#[serial]
async fn start_checkout_records_reference() {
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

    let response = CheckoutService::start_checkout(
        &state,
        &claims_for(resident, UserRole::Resident),
        booking,
    )
    .await
    .unwrap();

    assert!(response.reference.starts_with(&format!("CPH-{}", booking)));
    assert!(response
        .authorization_url
        .starts_with("https://checkout.paystack.com/mock-"));

    use cresthaven_primitives::schema::bookings;
    let stored: Option<String> = bookings::table
        .find(booking)
        .select(bookings::payment_reference)
        .first(conn)
        .unwrap();
    assert_eq!(stored, Some(response.reference));
}

#[tokio::test]
#[serial]
async fn only_owner_may_start_checkout() {
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

    let err = CheckoutService::start_checkout(
        &state,
        &claims_for(stranger, UserRole::Resident),
        booking,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::Forbidden(_)));
}

#[tokio::test]
#[serial]
async fn mock_reference_verification_confirms_booking() {
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

    let reference = format!("CPH-{}-1748775600000", booking);
    let confirmed = CheckoutService::complete_checkout(&state, booking, Some(&reference), None)
        .await
        .unwrap();

    assert!(confirmed);
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);

    // a replayed callback is a no-op success
    let confirmed_again =
        CheckoutService::complete_checkout(&state, booking, Some(&reference), None)
            .await
            .unwrap();
    assert!(confirmed_again);
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn mock_marker_confirms_only_in_mock_mode() {
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

    let confirmed = CheckoutService::complete_checkout(&state, booking, None, Some("success"))
        .await
        .unwrap();
    assert!(confirmed);
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn mock_marker_is_ignored_in_live_mode() {
    let mut config = common::test_config();
    config.paystack_details.mode = PaymentMode::Live;
    config.paystack_details.secret_key = Some(SecretString::from("sk_test_fake_paystack_key"));
    let state = common::create_test_app_state_with(config);
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

    let confirmed = CheckoutService::complete_checkout(&state, booking, None, Some("success"))
        .await
        .unwrap();

    assert!(!confirmed);
    assert_eq!(booking_status(conn, booking), BookingStatus::Pending);
}

#[tokio::test]
#[serial]
async fn failed_live_verification_leaves_booking_pending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/transaction/initialize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/xyz",
                "access_code": "xyz",
                "reference": "will-be-replaced"
            }
        })))
        .mount(&mock_server)
        .await;

    let mut config = common::test_config();
    config.paystack_details.mode = PaymentMode::Live;
    config.paystack_details.secret_key = Some(SecretString::from("sk_test_fake_paystack_key"));
    config.paystack_details.api_url = mock_server.uri();
    let state = common::create_test_app_state_with(config);
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

    let reference = format!("CPH-{}-1748775600000", booking);

    Mock::given(method("GET"))
        .and(path(format!("/transaction/verify/{}", reference)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Verification successful",
            "data": { "status": "abandoned" }
        })))
        .mount(&mock_server)
        .await;

    let confirmed = CheckoutService::complete_checkout(&state, booking, Some(&reference), None)
        .await
        .unwrap();

    assert!(!confirmed);
    assert_eq!(booking_status(conn, booking), BookingStatus::Pending);

    // retry after the processor reports success
    mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path(format!("/transaction/verify/{}", reference)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Verification successful",
            "data": { "status": "success" }
        })))
        .mount(&mock_server)
        .await;

    let confirmed = CheckoutService::complete_checkout(&state, booking, Some(&reference), None)
        .await
        .unwrap();

    assert!(confirmed);
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn webhook_charge_success_confirms_booking() {
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

    let payload = PaystackWebhook {
        event: "charge.success".to_string(),
        data: PaystackWebhookData {
            reference: format!("CPH-{}-1748775600000", booking),
            status: Some("success".to_string()),
        },
    };

    PaystackService::handle_event(conn, &payload).unwrap();
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);

    // redelivery is harmless
    PaystackService::handle_event(conn, &payload).unwrap();
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn webhook_endpoint_enforces_signature() {
    use axum_test::TestServer;
    use hmac::{Hmac, Mac};
    use sha2::Sha512;

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

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let body = json!({
        "event": "charge.success",
        "data": {
            "reference": format!("CPH-{}-1748775600000", booking),
            "status": "success"
        }
    })
    .to_string();

    // forged signature is rejected, booking untouched
    let response = server
        .post("/webhooks/paystack")
        .add_header(
            http::HeaderName::from_static("x-paystack-signature"),
            http::HeaderValue::from_static("deadbeef"),
        )
        .content_type("application/json")
        .bytes(body.clone().into())
        .await;
    response.assert_status(http::StatusCode::FORBIDDEN);
    assert_eq!(booking_status(conn, booking), BookingStatus::Pending);

    // properly signed delivery confirms the booking
    let mut mac =
        Hmac::<Sha512>::new_from_slice(b"test_paystack_webhook_secret").unwrap();
    mac.update(body.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    let response = server
        .post("/webhooks/paystack")
        .add_header(
            http::HeaderName::from_static("x-paystack-signature"),
            http::HeaderValue::from_str(&signature).unwrap(),
        )
        .content_type("application/json")
        .bytes(body.into())
        .await;
    response.assert_status_ok();
    assert_eq!(booking_status(conn, booking), BookingStatus::Confirmed);
}

#[tokio::test]
#[serial]
async fn webhook_ignores_other_events_and_cancelled_bookings() {
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

    let other_event = PaystackWebhook {
        event: "transfer.success".to_string(),
        data: PaystackWebhookData {
            reference: format!("CPH-{}-1748775600000", cancelled),
            status: None,
        },
    };
    PaystackService::handle_event(conn, &other_event).unwrap();

    let late_charge = PaystackWebhook {
        event: "charge.success".to_string(),
        data: PaystackWebhookData {
            reference: format!("CPH-{}-1748775600000", cancelled),
            status: Some("success".to_string()),
        },
    };
    PaystackService::handle_event(conn, &late_charge).unwrap();

    assert_eq!(booking_status(conn, cancelled), BookingStatus::Cancelled);
}
