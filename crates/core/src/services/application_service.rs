use crate::app_state::AppState;
use crate::repositories::application_repository::ApplicationRepository;
use crate::repositories::user_repository::UserRepository;
use crate::security::Claims;
use crate::services::activity_service::ActivityService;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::dtos::application_dto::SubmitApplicationRequest;
use cresthaven_primitives::models::entities::application::{
    ManagerApplication, NewManagerApplication,
};
use cresthaven_primitives::models::entities::enum_types::{ApplicationStatus, UserRole};
use tracing::{error, info};
use uuid::Uuid;

pub struct ApplicationService;

impl ApplicationService {
    /// Public submission; no session required.
    pub async fn submit(
        state: &AppState,
        req: SubmitApplicationRequest,
    ) -> Result<ManagerApplication, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("application.submit: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let application = ApplicationRepository::create(
            &mut conn,
            NewManagerApplication {
                full_name: &req.full_name,
                email: &req.email,
                phone: &req.phone,
                company_name: req.company_name.as_deref(),
                properties_count: req.properties_count,
                experience_years: req.experience_years,
                message: &req.message,
                status: ApplicationStatus::Pending,
            },
        )?;

        info!(application_id = %application.id, "Manager application submitted");

        Ok(application)
    }

    pub async fn list(state: &AppState, claims: &Claims) -> Result<Vec<ManagerApplication>, ApiError> {
        Self::require_admin(claims)?;

        let mut conn = state.db.get().map_err(|_| {
            error!("application.list: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        ApplicationRepository::list(&mut conn)
    }

    /// Admin decision. Approval promotes the applicant's account, when one
    /// exists for the application email, to PropertyManager.
    pub async fn review(
        state: &AppState,
        claims: &Claims,
        application_id: Uuid,
        decision: ApplicationStatus,
    ) -> Result<ManagerApplication, ApiError> {
        Self::require_admin(claims)?;
        let actor_id = claims.user_id()?;

        if decision == ApplicationStatus::Pending {
            return Err(ApiError::Conflict(
                "An application cannot be returned to pending".into(),
            ));
        }

        let mut conn = state.db.get().map_err(|_| {
            error!("application.review: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        if ApplicationRepository::find_by_id(&mut conn, application_id)?.is_none() {
            return Err(ApiError::NotFound("Application does not exist".into()));
        }

        let application = ApplicationRepository::decide(&mut conn, application_id, decision)?
            .ok_or_else(|| ApiError::Conflict("Application has already been decided".into()))?;

        if decision == ApplicationStatus::Approved {
            if let Some(user) = UserRepository::find_by_email(&mut conn, &application.email)? {
                UserRepository::update_role(&mut conn, user.id, UserRole::PropertyManager)?;
                info!(
                    user_id = %user.id,
                    "Applicant promoted to property manager"
                );
            }
        }

        let _ = ActivityService::log_event(
            state,
            Some(actor_id),
            "application.review",
            Some("application"),
            Some(&application_id.to_string()),
            serde_json::json!({ "decision": decision }),
            None,
        )
        .await;

        Ok(application)
    }

    fn require_admin(claims: &Claims) -> Result<(), ApiError> {
        if !claims.is_admin() {
            return Err(ApiError::Forbidden(
                "Administrator role required".into(),
            ));
        }
        Ok(())
    }
}
