use chrono::Utc;
use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::application::{
    ManagerApplication, NewManagerApplication,
};
use cresthaven_primitives::models::entities::enum_types::ApplicationStatus;
use cresthaven_primitives::schema::manager_applications;
use diesel::prelude::*;
use uuid::Uuid;

pub struct ApplicationRepository;

impl ApplicationRepository {
    pub fn create(
        conn: &mut PgConnection,
        new_application: NewManagerApplication,
    ) -> Result<ManagerApplication, ApiError> {
        diesel::insert_into(manager_applications::table)
            .values(&new_application)
            .get_result::<ManagerApplication>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<ManagerApplication>, ApiError> {
        manager_applications::table
            .find(id)
            .first::<ManagerApplication>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list(conn: &mut PgConnection) -> Result<Vec<ManagerApplication>, ApiError> {
        manager_applications::table
            .order(manager_applications::created_at.desc())
            .load::<ManagerApplication>(conn)
            .map_err(ApiError::from)
    }

    /// Guarded on Pending so an application is only decided once.
    pub fn decide(
        conn: &mut PgConnection,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<ManagerApplication>, ApiError> {
        diesel::update(
            manager_applications::table
                .find(id)
                .filter(manager_applications::status.eq(ApplicationStatus::Pending)),
        )
        .set((
            manager_applications::status.eq(status),
            manager_applications::updated_at.eq(Utc::now()),
        ))
        .get_result::<ManagerApplication>(conn)
        .optional()
        .map_err(ApiError::from)
    }
}
