pub mod activity_log;
pub mod application;
pub mod authentication;
pub mod booking;
pub mod enum_types;
pub mod message;
pub mod property;
pub mod review;
pub mod user;

pub use activity_log::{ActivityLog, NewActivityLog};
pub use application::{ManagerApplication, NewManagerApplication};
pub use authentication::{BlacklistedToken, NewBlacklistedToken};
pub use booking::{Booking, NewBooking};
pub use enum_types::*;
pub use message::{Message, NewMessage};
pub use property::{NewProperty, Property, PropertyChangeset};
pub use review::{NewReview, Review};
pub use user::{NewUser, User};
