pub mod activity_service;
pub mod application_service;
pub mod auth_service;
pub mod booking_service;
pub mod checkout_service;
pub mod message_service;
pub mod paystack_service;
pub mod property_service;
pub mod review_service;
