use chrono::Utc;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::message::{Message, NewMessage};
use cresthaven_primitives::schema::messages;
use diesel::prelude::*;
use uuid::Uuid;

pub struct MessageRepository;

impl MessageRepository {
    pub fn create(conn: &mut PgConnection, new_message: NewMessage) -> Result<Message, ApiError> {
        diesel::insert_into(messages::table)
            .values(&new_message)
            .get_result::<Message>(conn)
            .map_err(ApiError::from)
    }

    /// Both directions of a two-party conversation, oldest first.
    pub fn conversation(
        conn: &mut PgConnection,
        user_a: Uuid,
        user_b: Uuid,
    ) -> Result<Vec<Message>, ApiError> {
        messages::table
            .filter(
                messages::sender_id
                    .eq(user_a)
                    .and(messages::recipient_id.eq(user_b))
                    .or(messages::sender_id
                        .eq(user_b)
                        .and(messages::recipient_id.eq(user_a))),
            )
            .order(messages::created_at.asc())
            .load::<Message>(conn)
            .map_err(ApiError::from)
    }

    pub fn mark_read(
        conn: &mut PgConnection,
        recipient_id: Uuid,
        sender_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::update(
            messages::table
                .filter(messages::recipient_id.eq(recipient_id))
                .filter(messages::sender_id.eq(sender_id))
                .filter(messages::read_at.is_null()),
        )
        .set(messages::read_at.eq(Utc::now()))
        .execute(conn)
        .map_err(ApiError::from)
    }
}
