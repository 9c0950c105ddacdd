use crate::models::entities::enum_types::ApplicationStatus;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 2, max = 200))]
    pub full_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 7, max = 32))]
    pub phone: String,

    #[validate(length(max = 200))]
    pub company_name: Option<String>,

    #[validate(range(min = 0, max = 10_000))]
    pub properties_count: i32,

    #[validate(range(min = 0, max = 80))]
    pub experience_years: i32,

    #[validate(length(min = 1, max = 4000))]
    pub message: String,
}

impl SubmitApplicationRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewApplicationRequest {
    pub status: ApplicationStatus,
}
