use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(belongs_to(crate::models::entities::property::Property))]
#[diesel(belongs_to(crate::models::entities::user::User))]
pub struct Review {
    pub id: Uuid,
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub property_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<&'a str>,
}
