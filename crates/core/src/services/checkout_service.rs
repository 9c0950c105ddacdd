use crate::app_state::AppState;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use crate::services::activity_service::ActivityService;
use crate::services::booking_service::BookingService;
use chrono::Utc;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::app_state::PaymentMode;
use cresthaven_primitives::models::dtos::checkout_dto::CheckoutResponse;
use cresthaven_primitives::models::entities::enum_types::BookingStatus;
use tracing::{error, info, warn};
use uuid::Uuid;

pub struct CheckoutService;

impl CheckoutService {
    /// Opens a payment attempt for a booking the actor owns and returns the
    /// gateway's authorization URL.
    pub async fn start_checkout(
        state: &AppState,
        claims: &Claims,
        booking_id: Uuid,
    ) -> Result<CheckoutResponse, ApiError> {
        let actor_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("checkout.start: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let booking = BookingRepository::find_by_id(&mut conn, booking_id)?
            .ok_or_else(|| ApiError::NotFound("Booking does not exist".into()))?;

        if booking.user_id != actor_id {
            return Err(ApiError::Forbidden(
                "Only the booking's owner may pay for it".into(),
            ));
        }

        if booking.status == BookingStatus::Cancelled {
            return Err(ApiError::Conflict(
                "A cancelled booking cannot be paid for".into(),
            ));
        }

        let payer = UserRepository::find_by_id(&mut conn, booking.user_id)?
            .ok_or_else(|| ApiError::NotFound("User does not exist".into()))?;

        let reference = format!("CPH-{}-{}", booking.id, Utc::now().timestamp_millis());
        let callback_url = format!(
            "{}/api/checkout/verify?booking_id={}",
            state.config.app_url, booking.id
        );

        let init = state
            .paystack
            .initialize_transaction(booking.total_price, &payer.email, &reference, &callback_url)
            .await?;

        BookingRepository::set_payment_reference(&mut conn, booking.id, &init.reference)?;

        let _ = ActivityService::log_event(
            state,
            Some(actor_id),
            "checkout.initialize",
            Some("booking"),
            Some(&booking.id.to_string()),
            serde_json::json!({ "reference": init.reference, "amount": booking.total_price }),
            None,
        )
        .await;

        info!(
            booking_id = %booking.id,
            reference = %init.reference,
            "Checkout initialized"
        );

        Ok(CheckoutResponse {
            authorization_url: init.authorization_url,
            access_code: init.access_code,
            reference: init.reference,
        })
    }

    /// The callback surface. Returns whether the payment was confirmed; a
    /// `false` leaves the booking untouched and the resident free to retry.
    pub async fn complete_checkout(
        state: &AppState,
        booking_id: Uuid,
        reference: Option<&str>,
        status_marker: Option<&str>,
    ) -> Result<bool, ApiError> {
        if let Some(reference) = reference {
            if !state.paystack.verify_transaction(reference).await? {
                warn!(
                    booking_id = %booking_id,
                    %reference,
                    "Payment verification reported failure"
                );
                return Ok(false);
            }

            BookingService::mark_confirmed_by_payment(state, booking_id).await?;
            return Ok(true);
        }

        // The bare success marker exists for the simulated gateway only;
        // in live mode it must never confirm anything.
        if status_marker == Some("success") {
            if state.paystack.mode() != PaymentMode::Mock {
                warn!(
                    booking_id = %booking_id,
                    "Ignoring mock success marker outside mock mode"
                );
                return Ok(false);
            }

            BookingService::mark_confirmed_by_payment(state, booking_id).await?;
            return Ok(true);
        }

        Ok(false)
    }
}
