pub mod activity_log_repository;
pub mod application_repository;
pub mod booking_repository;
pub mod message_repository;
pub mod property_repository;
pub mod review_repository;
pub mod user_repository;
