use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::activity_log::{ActivityLog, NewActivityLog};
use cresthaven_primitives::schema::activity_logs;
use diesel::prelude::*;

pub struct ActivityLogRepository;

impl ActivityLogRepository {
    pub fn create(conn: &mut PgConnection, new_log: NewActivityLog) -> Result<(), ApiError> {
        diesel::insert_into(activity_logs::table)
            .values(&new_log)
            .execute(conn)
            .map_err(ApiError::Database)?;
        Ok(())
    }

    pub fn list_recent(conn: &mut PgConnection, limit: i64) -> Result<Vec<ActivityLog>, ApiError> {
        activity_logs::table
            .order(activity_logs::created_at.desc())
            .limit(limit)
            .load::<ActivityLog>(conn)
            .map_err(ApiError::from)
    }
}
