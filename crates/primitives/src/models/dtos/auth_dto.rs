use crate::models::entities::enum_types::UserRole;
use crate::utility::validate_password;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "resident@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "P@ssw0rd123!", format = "password")]
    #[validate(custom(function = validate_password))]
    pub password: String,

    #[validate(length(min = 2))]
    pub full_name: Option<String>,

    #[validate(length(min = 7, max = 32))]
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.full_name = self.full_name.map(|n| n.trim().to_string());
        self
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct RegisterResponse {
    pub token: String,
    pub user_email: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[schema(example = "resident@example.com")]
    pub email: String,

    #[schema(format = "password")]
    pub password: String,
}

impl LoginRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Serialize, ToSchema, Debug)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user_email: Option<String>,
    pub role: UserRole,
}

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentUserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// --- Health ---

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}
