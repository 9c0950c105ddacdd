pub mod activity_logs;
pub mod booking_status;
pub mod checkout;
pub mod checkout_verify;
pub mod conversation;
pub mod create_booking;
pub mod create_property;
pub mod create_review;
pub mod current_user;
pub mod get_property;
pub mod health;
pub mod list_applications;
pub mod list_properties;
pub mod login;
pub mod logout;
pub mod manager_properties;
pub mod my_bookings;
pub mod paystack_webhook;
pub mod property_availability;
pub mod property_bookings;
pub mod property_reviews;
pub mod property_status;
pub mod register;
pub mod review_application;
pub mod send_message;
pub mod submit_application;
pub mod update_property;
