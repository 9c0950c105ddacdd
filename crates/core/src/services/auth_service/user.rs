use crate::repositories::user_repository::UserRepository;
use tracing::error;
use uuid::Uuid;

pub use crate::app_state::AppState;
pub use cresthaven_primitives::{
    error::{ApiError, AuthError},
    models::dtos::auth_dto::CurrentUserResponse,
};

pub struct UserService;

impl UserService {
    pub async fn current_user_summary(
        state: &AppState,
        usr_id: Uuid,
    ) -> Result<CurrentUserResponse, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("user.summary: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let user = UserRepository::find_by_id(&mut conn, usr_id)?
            .ok_or_else(|| ApiError::Auth(AuthError::InvalidToken("User does not exist".into())))?;

        Ok(CurrentUserResponse {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
            role: user.role,
            created_at: user.created_at,
        })
    }
}
