use axum::extract::{Extension, Json, Path, State};
use cresthaven_core::app_state::AppState;
use cresthaven_core::security::Claims;
use cresthaven_core::services::message_service::MessageService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::message::Message;
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/messages/{peer_id}",
    params(("peer_id" = Uuid, Path, description = "The other participant")),
    responses(
        (status = 200, description = "Two-way thread, oldest first"),
        (status = 401)
    ),
    security(("bearerAuth" = [])),
    tag = "Messages"
)]
pub async fn conversation(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(peer_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let thread = MessageService::conversation(&state, &claims, peer_id).await?;

    Ok(Json(thread))
}
