use chrono::{DateTime, Utc};
use diesel::{Insertable, Queryable};

#[derive(Debug, Queryable)]
#[diesel(table_name = crate::schema::blacklisted_tokens)]
pub struct BlacklistedToken {
    pub jti: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::blacklisted_tokens)]
pub struct NewBlacklistedToken<'a> {
    pub jti: &'a str,
    pub expires_at: DateTime<Utc>,
}
