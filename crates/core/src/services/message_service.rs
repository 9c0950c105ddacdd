use crate::app_state::AppState;
use crate::repositories::message_repository::MessageRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::message_dto::SendMessageRequest;
use cresthaven_primitives::models::entities::message::{Message, NewMessage};
use tracing::error;
use uuid::Uuid;

pub struct MessageService;

impl MessageService {
    pub async fn send(
        state: &AppState,
        claims: &Claims,
        req: SendMessageRequest,
    ) -> Result<Message, ApiError> {
        let sender_id = claims.user_id()?;

        if req.recipient_id == sender_id {
            return Err(ApiError::Conflict("Cannot message yourself".into()));
        }

        let mut conn = state.db.get().map_err(|_| {
            error!("message.send: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        if !UserRepository::exists(&mut conn, req.recipient_id)? {
            return Err(ApiError::NotFound("Recipient does not exist".into()));
        }

        MessageRepository::create(
            &mut conn,
            NewMessage {
                sender_id,
                recipient_id: req.recipient_id,
                property_id: req.property_id,
                body: &req.body,
            },
        )
    }

    /// Full two-way thread with `peer_id`; messages addressed to the caller
    /// are marked read as a side effect.
    pub async fn conversation(
        state: &AppState,
        claims: &Claims,
        peer_id: Uuid,
    ) -> Result<Vec<Message>, ApiError> {
        let user_id = claims.user_id()?;

        let mut conn = state.db.get().map_err(|_| {
            error!("message.thread: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let thread = MessageRepository::conversation(&mut conn, user_id, peer_id)?;
        MessageRepository::mark_read(&mut conn, user_id, peer_id)?;

        Ok(thread)
    }
}
