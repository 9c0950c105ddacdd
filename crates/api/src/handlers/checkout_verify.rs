use axum::extract::{Query, State};
use axum::response::Redirect;
use cresthaven_core::app_state::AppState;
use cresthaven_core::services::checkout_service::CheckoutService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::checkout_dto::VerifyQuery;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// The redirect target the payment gateway sends the resident back to.
/// Verification is idempotent; a failed attempt leaves the booking unchanged
/// so the resident can retry from their profile.
#[utoipa::path(
    get,
    path = "/api/checkout/verify",
    params(
        ("booking_id" = Uuid, Query, description = "Booking id"),
        ("reference" = Option<String>, Query, description = "Processor reference"),
        ("status" = Option<String>, Query, description = "Mock success marker")
    ),
    responses(
        (status = 303, description = "Redirect to the confirmation view")
    ),
    tag = "Checkout"
)]
pub async fn verify_checkout(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyQuery>,
) -> Result<Redirect, ApiError> {
    let confirmed = CheckoutService::complete_checkout(
        &state,
        query.booking_id,
        query.reference.as_deref(),
        query.status.as_deref(),
    )
    .await?;

    info!(
        booking_id = %query.booking_id,
        confirmed,
        "Checkout callback processed"
    );

    let outcome = if confirmed { "success" } else { "failed" };
    Ok(Redirect::to(&format!(
        "{}/profile?payment={}",
        state.config.app_url, outcome
    )))
}
