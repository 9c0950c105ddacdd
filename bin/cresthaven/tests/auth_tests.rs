use axum_test::TestServer;
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;

mod common;

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": "SecurePass123",
        "full_name": "Test Resident",
        "phone": "+233201234567"
    })
}

#[tokio::test]
#[serial]
async fn register_login_and_fetch_current_user() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let email = format!("resident_{}@example.com", Uuid::new_v4());

    let response = server.post("/api/register").json(&register_body(&email)).await;
    response.assert_status(http::StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user_email"], email);

    let response = server
        .post("/api/login")
        .json(&json!({ "email": email, "password": "SecurePass123" }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(body["role"], "RESIDENT");

    let response = server
        .get("/api/current_user")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], email);
    assert_eq!(body["role"], "RESIDENT");
}

#[tokio::test]
#[serial]
async fn wrong_password_is_unauthorized() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let email = format!("resident_{}@example.com", Uuid::new_v4());
    server.post("/api/register").json(&register_body(&email)).await;

    let response = server
        .post("/api/login")
        .json(&json!({ "email": email, "password": "WrongPass999" }))
        .await;

    response.assert_status(http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn protected_routes_require_a_token() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.get("/api/bookings").await;
    response.assert_status(http::StatusCode::UNAUTHORIZED);

    let response = server.get("/api/current_user").await;
    response.assert_status(http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn logout_blacklists_the_token() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let email = format!("resident_{}@example.com", Uuid::new_v4());
    let response = server.post("/api/register").json(&register_body(&email)).await;
    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().unwrap().to_string();

    let response = server
        .post("/api/logout")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();

    let response = server
        .get("/api/current_user")
        .authorization_bearer(&token)
        .await;
    response.assert_status(http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[serial]
async fn weak_password_is_rejected() {
    let state = common::create_test_app_state();
    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server
        .post("/api/register")
        .json(&json!({
            "email": format!("resident_{}@example.com", Uuid::new_v4()),
            "password": "short"
        }))
        .await;

    response.assert_status(http::StatusCode::BAD_REQUEST);
}
