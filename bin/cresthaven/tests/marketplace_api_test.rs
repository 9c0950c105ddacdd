use axum_test::TestServer;
use cresthaven_core::security::SecurityConfig;
use cresthaven_primitives::models::entities::enum_types::UserRole;
use serde_json::json;
use serial_test::serial;

mod common;

use common::fixtures::insert_user;

#[tokio::test]
#[serial]
async fn resident_cannot_list_a_property() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let resident = insert_user(conn, UserRole::Resident);
    let token = SecurityConfig::create_token(&state, resident, UserRole::Resident).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/manager/properties")
        .authorization_bearer(&token)
        .json(&json!({
            "title": "Harbour Loft",
            "description": "Two-bedroom loft above the marina.",
            "property_type": "APARTMENT",
            "address": "12 Quay Street",
            "city": "Accra",
            "country": "Ghana",
            "bedrooms": 2,
            "bathrooms": 1,
            "price_per_month": 20000,
            "billing_period": "PER_NIGHT"
        }))
        .await;

    response.assert_status(http::StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn booking_flow_over_http() {
    let state = common::create_test_app_state();
    let conn = &mut state.db.get().unwrap();

    let manager = insert_user(conn, UserRole::PropertyManager);
    let resident = insert_user(conn, UserRole::Resident);
    let manager_token =
        SecurityConfig::create_token(&state, manager, UserRole::PropertyManager).unwrap();
    let resident_token =
        SecurityConfig::create_token(&state, resident, UserRole::Resident).unwrap();

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    // manager lists a nightly-rate property
    let response = server
        .post("/api/manager/properties")
        .authorization_bearer(&manager_token)
        .json(&json!({
            "title": "Harbour Loft",
            "description": "Two-bedroom loft above the marina.",
            "property_type": "APARTMENT",
            "address": "12 Quay Street",
            "city": "Accra",
            "country": "Ghana",
            "bedrooms": 2,
            "bathrooms": 1,
            "price_per_month": 20000,
            "billing_period": "PER_NIGHT",
            "amenities": ["wifi"]
        }))
        .await;
    response.assert_status(http::StatusCode::CREATED);
    let property: serde_json::Value = response.json();
    let property_id = property["id"].as_str().unwrap().to_string();

    // the listing is publicly visible
    let response = server.get("/api/properties").await;
    response.assert_status_ok();
    let listings: serde_json::Value = response.json();
    assert!(listings
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["id"] == property["id"]));

    // resident books four nights
    let response = server
        .post("/api/bookings")
        .authorization_bearer(&resident_token)
        .json(&json!({
            "property_id": property_id,
            "check_in": "2025-06-01",
            "check_out": "2025-06-05",
            "guests": 2,
            "total_price": 80000,
            "phone": "+233201234567"
        }))
        .await;
    response.assert_status(http::StatusCode::CREATED);
    let booking: serde_json::Value = response.json();
    assert_eq!(booking["status"], "PENDING");
    let booking_id = booking["id"].as_str().unwrap().to_string();

    // the manager confirms it
    let response = server
        .patch(&format!("/api/bookings/{}/status", booking_id))
        .authorization_bearer(&manager_token)
        .json(&json!({ "status": "CONFIRMED" }))
        .await;
    response.assert_status_ok();
    let updated: serde_json::Value = response.json();
    assert_eq!(updated["status"], "CONFIRMED");

    // resident opens checkout; mock mode synthesizes the redirect
    let response = server
        .post(&format!("/api/checkout/{}", booking_id))
        .authorization_bearer(&resident_token)
        .await;
    response.assert_status_ok();
    let checkout: serde_json::Value = response.json();
    assert!(checkout["authorization_url"]
        .as_str()
        .unwrap()
        .starts_with("https://checkout.paystack.com/mock-"));

    // the gateway callback confirms idempotently and redirects
    let response = server
        .get("/api/checkout/verify")
        .add_query_param("booking_id", &booking_id)
        .add_query_param("reference", checkout["reference"].as_str().unwrap())
        .await;
    response.assert_status(http::StatusCode::SEE_OTHER);
    assert!(response
        .header("location")
        .to_str()
        .unwrap()
        .ends_with("/profile?payment=success"));

    // booking is still CONFIRMED afterwards
    let response = server
        .get("/api/bookings")
        .authorization_bearer(&resident_token)
        .await;
    response.assert_status_ok();
    let bookings: serde_json::Value = response.json();
    let row = bookings
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == booking["id"])
        .unwrap();
    assert_eq!(row["status"], "CONFIRMED");
}
