use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::review::{NewReview, Review};
use cresthaven_primitives::schema::reviews;
use diesel::prelude::*;
use uuid::Uuid;

pub struct ReviewRepository;

impl ReviewRepository {
    pub fn create(conn: &mut PgConnection, new_review: NewReview) -> Result<Review, ApiError> {
        diesel::insert_into(reviews::table)
            .values(&new_review)
            .get_result::<Review>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_by_property(
        conn: &mut PgConnection,
        property_id: Uuid,
    ) -> Result<Vec<Review>, ApiError> {
        reviews::table
            .filter(reviews::property_id.eq(property_id))
            .order(reviews::created_at.desc())
            .load::<Review>(conn)
            .map_err(ApiError::from)
    }

    pub fn user_reviewed(
        conn: &mut PgConnection,
        property_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, ApiError> {
        use diesel::dsl::{exists, select};

        select(exists(
            reviews::table
                .filter(reviews::property_id.eq(property_id))
                .filter(reviews::user_id.eq(user_id)),
        ))
        .get_result::<bool>(conn)
        .map_err(ApiError::from)
    }
}
