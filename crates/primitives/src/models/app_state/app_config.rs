use crate::models::app_state::jwt_details::JWTInfo;
use crate::models::app_state::paystack_details::PaystackInfo;
use eyre::eyre;
use eyre::Report;
use std::env;
use std::str::FromStr;

/// What `create_booking` does when a requested date range intersects an
/// existing Pending/Confirmed booking for the same property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapPolicy {
    Reject,
    Allow,
}

impl FromStr for OverlapPolicy {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(OverlapPolicy::Reject),
            "allow" => Ok(OverlapPolicy::Allow),
            other => Err(eyre!(
                "BOOKING_OVERLAP_POLICY must be 'reject' or 'allow', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JWTInfo,

    pub app_url: String,

    pub paystack_details: PaystackInfo,

    pub overlap_policy: OverlapPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JWTInfo::new()?,

            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            paystack_details: PaystackInfo::new()?,

            overlap_policy: env::var("BOOKING_OVERLAP_POLICY")
                .unwrap_or_else(|_| "reject".into())
                .parse()?,
        })
    }
}
