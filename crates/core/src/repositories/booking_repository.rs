use chrono::{NaiveDate, Utc};
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::booking_dto::BookingDatesDto;
use cresthaven_primitives::models::entities::booking::{Booking, NewBooking};
use cresthaven_primitives::models::entities::enum_types::BookingStatus;
use cresthaven_primitives::schema::{bookings, properties};
use diesel::prelude::*;
use uuid::Uuid;

pub struct BookingRepository;

impl BookingRepository {
    pub fn create(conn: &mut PgConnection, new_booking: NewBooking) -> Result<Booking, ApiError> {
        diesel::insert_into(bookings::table)
            .values(&new_booking)
            .get_result::<Booking>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<Booking>, ApiError> {
        bookings::table
            .find(id)
            .first::<Booking>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Booking together with the managing property's manager id, for
    /// ownership checks.
    pub fn find_with_manager(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<(Booking, Uuid)>, ApiError> {
        bookings::table
            .inner_join(properties::table)
            .filter(bookings::id.eq(id))
            .select((bookings::all_columns, properties::manager_id))
            .first::<(Booking, Uuid)>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_by_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Booking>, ApiError> {
        bookings::table
            .filter(bookings::user_id.eq(user_id))
            .order(bookings::created_at.desc())
            .load::<Booking>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_property(
        conn: &mut PgConnection,
        property_id: Uuid,
    ) -> Result<Vec<Booking>, ApiError> {
        bookings::table
            .filter(bookings::property_id.eq(property_id))
            .order(bookings::created_at.desc())
            .load::<Booking>(conn)
            .map_err(ApiError::from)
    }

    /// Occupied date ranges of a property, for availability display.
    pub fn occupied_dates(
        conn: &mut PgConnection,
        property_id: Uuid,
    ) -> Result<Vec<BookingDatesDto>, ApiError> {
        bookings::table
            .filter(bookings::property_id.eq(property_id))
            .filter(bookings::status.eq_any([BookingStatus::Pending, BookingStatus::Confirmed]))
            .select((bookings::check_in, bookings::check_out))
            .load::<BookingDatesDto>(conn)
            .map_err(ApiError::from)
    }

    /// True when [check_in, check_out) intersects an active booking of the
    /// same property.
    pub fn overlapping_exists(
        conn: &mut PgConnection,
        property_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<bool, ApiError> {
        use diesel::dsl::{exists, select};

        select(exists(
            bookings::table
                .filter(bookings::property_id.eq(property_id))
                .filter(
                    bookings::status.eq_any([BookingStatus::Pending, BookingStatus::Confirmed]),
                )
                .filter(bookings::check_in.lt(check_out))
                .filter(bookings::check_out.gt(check_in)),
        ))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
    }

    /// Conditional UPDATE guarded on the transition lattice: the row is
    /// only touched while its current status is a legal source for `next`.
    /// Returns None when the guard did not match (row gone or illegal
    /// transition), so callers can distinguish without a read-modify-write.
    pub fn transition_status(
        conn: &mut PgConnection,
        id: Uuid,
        next: BookingStatus,
    ) -> Result<Option<Booking>, ApiError> {
        let sources = BookingStatus::allowed_sources(next);

        diesel::update(
            bookings::table
                .find(id)
                .filter(bookings::status.eq_any(sources.iter().copied())),
        )
        .set((
            bookings::status.eq(next),
            bookings::updated_at.eq(Utc::now()),
        ))
        .get_result::<Booking>(conn)
        .optional()
        .map_err(ApiError::from)
    }

    /// Payment-side confirmation. Matches any row that is not Cancelled, so
    /// repeating the call on a Confirmed booking is a harmless no-op while a
    /// Cancelled booking is never resurrected.
    pub fn confirm_by_payment(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<Booking>, ApiError> {
        diesel::update(
            bookings::table
                .find(id)
                .filter(bookings::status.ne(BookingStatus::Cancelled)),
        )
        .set((
            bookings::status.eq(BookingStatus::Confirmed),
            bookings::updated_at.eq(Utc::now()),
        ))
        .get_result::<Booking>(conn)
        .optional()
        .map_err(ApiError::from)
    }

    pub fn set_payment_reference(
        conn: &mut PgConnection,
        id: Uuid,
        reference: &str,
    ) -> Result<(), ApiError> {
        diesel::update(bookings::table.find(id))
            .set((
                bookings::payment_reference.eq(reference),
                bookings::updated_at.eq(Utc::now()),
            ))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }
}
