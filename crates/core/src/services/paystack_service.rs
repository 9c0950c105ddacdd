use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::providers::paystack::PaystackWebhook;
use cresthaven_primitives::models::entities::enum_types::BookingStatus;
use diesel::prelude::*;
use tracing::{info, warn};
use uuid::Uuid;

use crate::repositories::booking_repository::BookingRepository;

pub struct PaystackService;

impl PaystackService {
    /// Applies a `charge.success` webhook to the referenced booking. Other
    /// events are acknowledged and ignored. Idempotent against redelivery.
    pub fn handle_event(conn: &mut PgConnection, payload: &PaystackWebhook) -> Result<(), ApiError> {
        if payload.event != "charge.success" {
            return Ok(());
        }

        let booking_id = Self::booking_id_from_reference(&payload.data.reference)?;

        if BookingRepository::confirm_by_payment(conn, booking_id)?.is_some() {
            info!(
                booking_id = %booking_id,
                reference = %payload.data.reference,
                "Webhook confirmed booking"
            );
            return Ok(());
        }

        match BookingRepository::find_by_id(conn, booking_id)? {
            Some(booking) if booking.status == BookingStatus::Cancelled => {
                info!(
                    booking_id = %booking_id,
                    "Ignoring late payment for cancelled booking"
                );
                Ok(())
            }
            Some(_) => Ok(()),
            None => {
                warn!(
                    reference = %payload.data.reference,
                    "Webhook references unknown booking"
                );
                Err(ApiError::NotFound("Booking does not exist".into()))
            }
        }
    }

    /// References are minted as `CPH-<booking id>-<unix millis>`; the
    /// trailing segment never contains a hyphen.
    fn booking_id_from_reference(reference: &str) -> Result<Uuid, ApiError> {
        let stripped = reference
            .strip_prefix("CPH-")
            .ok_or_else(|| ApiError::Upstream("Unrecognized payment reference".into()))?;

        let (id_part, _ts) = stripped
            .rsplit_once('-')
            .ok_or_else(|| ApiError::Upstream("Unrecognized payment reference".into()))?;

        Uuid::parse_str(id_part)
            .map_err(|_| ApiError::Upstream("Unrecognized payment reference".into()))
    }

    pub fn verify_signature(
        secret: &str,
        payload: &[u8],
        actual_signature: &str,
    ) -> Result<(), ApiError> {
        use hmac::{Hmac, Mac};
        use sha2::Sha512;
        use subtle::ConstantTimeEq;

        type HmacSha512 = Hmac<Sha512>;

        let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
            .map_err(|_| ApiError::Token("Invalid webhook secret".into()))?;

        mac.update(payload);
        let expected = hex::encode(mac.finalize().into_bytes());

        if expected
            .as_bytes()
            .ct_eq(actual_signature.as_bytes())
            .unwrap_u8()
            != 1
        {
            return Err(ApiError::Forbidden("Invalid Paystack signature".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PaystackService;
    use uuid::Uuid;

    #[test]
    fn reference_round_trip() {
        let id = Uuid::new_v4();
        let reference = format!("CPH-{}-1748775600000", id);

        assert_eq!(
            PaystackService::booking_id_from_reference(&reference).unwrap(),
            id
        );
    }

    #[test]
    fn malformed_reference_rejected() {
        assert!(PaystackService::booking_id_from_reference("PSK-xyz").is_err());
        assert!(PaystackService::booking_id_from_reference("CPH-not-a-uuid").is_err());
    }
}
