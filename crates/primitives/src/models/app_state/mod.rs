pub mod app_config;
pub mod jwt_details;
pub mod paystack_details;

pub use app_config::{AppConfig, OverlapPolicy};
pub use jwt_details::JWTInfo;
pub use paystack_details::{PaymentMode, PaystackInfo};
