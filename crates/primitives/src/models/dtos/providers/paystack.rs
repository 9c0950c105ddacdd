use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope Paystack wraps every response in.
#[derive(Debug, Deserialize)]
pub struct PaystackResponse<T> {
    pub status: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
pub struct InitializeTransactionBody<'a> {
    pub email: &'a str,
    /// Integer minor units, after the configured FX multiplier.
    pub amount: i64,
    pub reference: &'a str,
    pub callback_url: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InitializeTransactionData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyTransactionData {
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaystackWebhook {
    pub event: String,
    pub data: PaystackWebhookData,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaystackWebhookData {
    pub reference: String,
    pub status: Option<String>,
}
