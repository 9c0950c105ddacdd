use axum::body::Bytes;
use axum::{extract::State, http::StatusCode};
use cresthaven_core::services::paystack_service::PaystackService;
use cresthaven_core::app_state::AppState;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::providers::paystack::PaystackWebhook;
use secrecy::ExposeSecret;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/webhooks/paystack",
    request_body = PaystackWebhook,
    responses(
        (status = 200, description = "Webhook processed"),
        (status = 403, description = "Invalid signature"),
        (status = 400, description = "Invalid payload")
    ),
    tag = "Webhook"
)]
pub async fn paystack_webhook(
    State(state): State<Arc<AppState>>,
    headers: axum::http::HeaderMap,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let secret = state
        .config
        .paystack_details
        .webhook_secret
        .as_ref()
        .ok_or_else(|| ApiError::Internal("Webhook secret not configured".into()))?;

    let signature = headers
        .get("x-paystack-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Forbidden("Missing Paystack signature".into()))?;

    PaystackService::verify_signature(secret.expose_secret(), &body, signature)?;

    let payload: PaystackWebhook = serde_json::from_slice(&body)
        .map_err(|_| ApiError::Upstream("Invalid webhook payload".into()))?;

    let mut conn = state
        .db
        .get()
        .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

    PaystackService::handle_event(&mut conn, &payload)?;

    Ok(StatusCode::OK)
}
