use crate::app_state::AppState;
use crate::repositories::activity_log_repository::ActivityLogRepository;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::activity_log::NewActivityLog;
use uuid::Uuid;

/// Append-only audit trail. Callers ignore the result; a failed append must
/// never fail the operation that produced it.
pub struct ActivityService;

impl ActivityService {
    pub async fn log_event(
        state: &AppState,
        user_id: Option<Uuid>,
        event_type: &str,
        target_type: Option<&str>,
        target_id: Option<&str>,
        metadata: serde_json::Value,
        ip_address: Option<String>,
    ) -> Result<(), ApiError> {
        let mut conn = state
            .db
            .get()
            .map_err(|e| ApiError::DatabaseConnection(e.to_string()))?;

        let new_log = NewActivityLog {
            id: Uuid::new_v4(),
            user_id,
            event_type: event_type.to_string(),
            target_type: target_type.map(|s| s.to_string()),
            target_id: target_id.map(|s| s.to_string()),
            metadata,
            ip_address,
        };

        ActivityLogRepository::create(&mut conn, new_log)
    }
}
