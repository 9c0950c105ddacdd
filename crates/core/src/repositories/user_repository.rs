use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::entities::enum_types::UserRole;
use cresthaven_primitives::models::entities::user::{NewUser, User};
use cresthaven_primitives::schema::users;
use diesel::prelude::*;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    pub fn create(conn: &mut PgConnection, new_user: NewUser) -> Result<User, ApiError> {
        diesel::insert_into(users::table)
            .values(&new_user)
            .get_result::<User>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(conn: &mut PgConnection, id: Uuid) -> Result<Option<User>, ApiError> {
        users::table
            .find(id)
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_by_email(conn: &mut PgConnection, email: &str) -> Result<Option<User>, ApiError> {
        users::table
            .filter(users::email.eq(email))
            .first::<User>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn exists(conn: &mut PgConnection, id: Uuid) -> Result<bool, ApiError> {
        use diesel::dsl::{exists, select};

        select(exists(users::table.find(id)))
            .get_result::<bool>(conn)
            .map_err(ApiError::from)
    }

    /// Promote/demote. Used when a manager application is approved.
    pub fn update_role(
        conn: &mut PgConnection,
        id: Uuid,
        role: UserRole,
    ) -> Result<usize, ApiError> {
        diesel::update(users::table.find(id))
            .set(users::role.eq(role))
            .execute(conn)
            .map_err(ApiError::from)
    }
}
