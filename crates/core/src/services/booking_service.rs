use crate::app_state::AppState;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::property_repository::PropertyRepository;
use crate::security::Claims;
use crate::services::activity_service::ActivityService;
use chrono::NaiveDate;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::app_state::OverlapPolicy;
use cresthaven_primitives::models::dtos::booking_dto::CreateBookingRequest;
use cresthaven_primitives::models::entities::booking::{Booking, NewBooking};
use cresthaven_primitives::models::entities::enum_types::{BillingPeriod, BookingStatus};
use cresthaven_primitives::models::entities::property::Property;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Days a monthly rate is spread over when pricing per-night stays.
const BILLING_DAYS_PER_MONTH: i64 = 30;

pub struct BookingService;

impl BookingService {
    pub async fn create_booking(
        state: &AppState,
        claims: &Claims,
        req: CreateBookingRequest,
    ) -> Result<Booking, ApiError> {
        let user_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("booking.create: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        if req.check_out <= req.check_in {
            return Err(ApiError::validation("check_out", "check_out_not_after_check_in"));
        }

        let property = PropertyRepository::find_by_id(&mut conn, req.property_id)?
            .ok_or_else(|| ApiError::NotFound("Property does not exist".into()))?;

        let expected_total = Self::compute_total(&property, req.check_in, req.check_out)?;
        if req.total_price != expected_total {
            warn!(
                property_id = %property.id,
                supplied = req.total_price,
                expected = expected_total,
                "booking.create: rejected caller-supplied total"
            );
            return Err(ApiError::validation("total_price", "total_price_mismatch"));
        }

        if state.config.overlap_policy == OverlapPolicy::Reject
            && BookingRepository::overlapping_exists(
                &mut conn,
                property.id,
                req.check_in,
                req.check_out,
            )?
        {
            return Err(ApiError::Conflict(
                "The requested dates are no longer available".into(),
            ));
        }

        let booking = BookingRepository::create(
            &mut conn,
            NewBooking {
                property_id: property.id,
                user_id,
                check_in: req.check_in,
                check_out: req.check_out,
                guests: req.guests,
                total_price: expected_total,
                currency: property.currency,
                status: BookingStatus::Pending,
                message: req.message.as_deref(),
                phone: req.phone.as_deref(),
            },
        )?;

        let _ = ActivityService::log_event(
            state,
            Some(user_id),
            "booking.create",
            Some("booking"),
            Some(&booking.id.to_string()),
            serde_json::json!({
                "property_id": property.id,
                "check_in": booking.check_in,
                "check_out": booking.check_out,
                "total_price": booking.total_price,
            }),
            None,
        )
        .await;

        info!(
            booking_id = %booking.id,
            property_id = %property.id,
            "Booking created"
        );

        Ok(booking)
    }

    /// Manager/admin transition along the status lattice. The write is a
    /// conditional UPDATE so two racing callers cannot both move the row.
    pub async fn update_status(
        state: &AppState,
        claims: &Claims,
        booking_id: Uuid,
        next: BookingStatus,
    ) -> Result<Booking, ApiError> {
        let actor_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("booking.status: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let (booking, manager_id) = BookingRepository::find_with_manager(&mut conn, booking_id)?
            .ok_or_else(|| ApiError::NotFound("Booking does not exist".into()))?;

        if actor_id != manager_id && !claims.is_admin() {
            return Err(ApiError::Forbidden(
                "Only the property's manager or an administrator may update this booking".into(),
            ));
        }

        if !booking.status.can_transition_to(next) {
            return Err(ApiError::Conflict(format!(
                "Cannot move booking from {} to {}",
                booking.status, next
            )));
        }

        let updated = BookingRepository::transition_status(&mut conn, booking_id, next)?
            .ok_or_else(|| {
                ApiError::Conflict("Booking status changed concurrently".into())
            })?;

        let _ = ActivityService::log_event(
            state,
            Some(actor_id),
            "booking.status_update",
            Some("booking"),
            Some(&booking_id.to_string()),
            serde_json::json!({ "from": booking.status, "to": next }),
            None,
        )
        .await;

        info!(
            booking_id = %booking_id,
            from = %booking.status,
            to = %next,
            "Booking status updated"
        );

        Ok(updated)
    }

    /// Confirmation driven by the payment gateway. Idempotent: repeating the
    /// call on a Confirmed booking returns the current row. A Cancelled
    /// booking is never resurrected; that case is a Conflict.
    pub async fn mark_confirmed_by_payment(
        state: &AppState,
        booking_id: Uuid,
    ) -> Result<Booking, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("booking.confirm: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        if let Some(booking) = BookingRepository::confirm_by_payment(&mut conn, booking_id)? {
            info!(booking_id = %booking_id, "Booking confirmed by payment");
            return Ok(booking);
        }

        match BookingRepository::find_by_id(&mut conn, booking_id)? {
            Some(_) => Err(ApiError::Conflict(
                "A cancelled booking cannot be confirmed by payment".into(),
            )),
            None => Err(ApiError::NotFound("Booking does not exist".into())),
        }
    }

    /// Authoritative total: nights times the property's nightly rate.
    /// A monthly rate is spread over [`BILLING_DAYS_PER_MONTH`].
    pub fn compute_total(
        property: &Property,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<i64, ApiError> {
        let nights = (check_out - check_in).num_days();
        if nights < 1 {
            return Err(ApiError::validation("check_out", "check_out_not_after_check_in"));
        }

        let nightly = match property.billing_period {
            BillingPeriod::PerNight => property.price_per_month,
            BillingPeriod::PerMonth => property.price_per_month / BILLING_DAYS_PER_MONTH,
        };

        nights
            .checked_mul(nightly)
            .ok_or_else(|| ApiError::Internal("Booking total overflow".into()))
    }
}
