pub mod application_dto;
pub mod auth_dto;
pub mod booking_dto;
pub mod checkout_dto;
pub mod message_dto;
pub mod property_dto;
pub mod providers;
pub mod review_dto;

pub use application_dto::*;
pub use auth_dto::*;
pub use booking_dto::*;
pub use checkout_dto::*;
pub use message_dto::*;
pub use property_dto::*;
pub use review_dto::*;
