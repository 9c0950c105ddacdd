use axum::extract::{Extension, Json, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::message_service::MessageService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::message_dto::SendMessageRequest;
use cresthaven_primitives::models::entities::message::Message;
use http::StatusCode;
use std::sync::Arc;
use tracing::error;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message delivered"),
        (status = 404, description = "Recipient does not exist")
    ),
    security(("bearerAuth" = [])),
    tag = "Messages"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SendMessageRequest>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let message = MessageService::send(&state, &claims, req).await?;

    Ok((StatusCode::CREATED, Json(message)))
}
