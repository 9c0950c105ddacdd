use crate::models::entities::enum_types::ApplicationStatus;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

/// A prospective property manager's application, submitted publicly and
/// reviewed by an administrator.
#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = crate::schema::manager_applications)]
pub struct ManagerApplication {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company_name: Option<String>,
    pub properties_count: i32,
    pub experience_years: i32,
    pub message: String,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::manager_applications)]
pub struct NewManagerApplication<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company_name: Option<&'a str>,
    pub properties_count: i32,
    pub experience_years: i32,
    pub message: &'a str,
    pub status: ApplicationStatus,
}
