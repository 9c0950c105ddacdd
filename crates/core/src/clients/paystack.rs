use cresthaven_primitives::error::ApiError;
use cresthaven_primitives::models::app_state::{PaymentMode, PaystackInfo};
use cresthaven_primitives::models::dtos::providers::paystack::{
    InitializeTransactionBody, InitializeTransactionData, PaystackResponse, VerifyTransactionData,
};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{info, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bridge to the Paystack processor. In [`PaymentMode::Mock`] the client
/// synthesizes a deterministic success without any network traffic; both
/// modes present the same contract to callers.
#[derive(Clone)]
pub struct PaystackClient {
    http: Client,
    base_url: Url,
    mode: PaymentMode,
    secret_key: Option<SecretString>,
    fx_multiplier: i64,
}

impl PaystackClient {
    pub fn new(http: Client, details: &PaystackInfo) -> Result<Self, ApiError> {
        let base_url = Url::parse(&details.api_url)
            .map_err(|_| ApiError::Internal("Invalid Paystack base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            mode: details.mode,
            secret_key: details.secret_key.clone(),
            fx_multiplier: details.fx_multiplier,
        })
    }

    pub fn mode(&self) -> PaymentMode {
        self.mode
    }

    /// Opens a transaction with the processor and returns the URL the payer
    /// must be redirected to. `amount_minor` is in the booking's minor
    /// units; the configured FX multiplier is applied before transmission.
    pub async fn initialize_transaction(
        &self,
        amount_minor: i64,
        email: &str,
        reference: &str,
        callback_url: &str,
    ) -> Result<InitializeTransactionData, ApiError> {
        if self.mode == PaymentMode::Mock {
            info!(%reference, "Mock payment initialized");
            return Ok(InitializeTransactionData {
                authorization_url: format!("https://checkout.paystack.com/mock-{}", reference),
                access_code: "mock-code".to_string(),
                reference: reference.to_string(),
            });
        }

        let url = self.endpoint("transaction/initialize")?;

        let body = InitializeTransactionBody {
            email,
            amount: amount_minor
                .checked_mul(self.fx_multiplier)
                .ok_or_else(|| ApiError::Internal("Charge amount overflow".into()))?,
            reference,
            callback_url,
        };

        let resp = self
            .http
            .post(url)
            .bearer_auth(self.secret()?.expose_secret())
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to reach Paystack");
                ApiError::Upstream("Paystack service unavailable".into())
            })?;

        let status = resp.status();

        let envelope: PaystackResponse<InitializeTransactionData> =
            resp.json().await.map_err(|_| {
                ApiError::Upstream("Invalid Paystack initialize response".into())
            })?;

        if !status.is_success() || !envelope.status {
            warn!(
                http_status = status.as_u16(),
                paystack_message = %envelope.message,
                "Paystack transaction initialize failed"
            );
            return Err(ApiError::Upstream(envelope.message));
        }

        envelope
            .data
            .ok_or_else(|| ApiError::Upstream("Missing initialize data".into()))
    }

    /// Looks up the terminal status of a transaction by reference. Safe to
    /// call any number of times for the same reference.
    pub async fn verify_transaction(&self, reference: &str) -> Result<bool, ApiError> {
        if self.mode == PaymentMode::Mock {
            return Ok(true);
        }

        let url = self.endpoint(&format!("transaction/verify/{}", reference))?;

        let resp = self
            .http
            .get(url)
            .bearer_auth(self.secret()?.expose_secret())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, %reference, "Failed to reach Paystack for verification");
                ApiError::Upstream("Paystack service unavailable".into())
            })?;

        if !resp.status().is_success() {
            warn!(
                http_status = resp.status().as_u16(),
                %reference,
                "Paystack transaction verify failed"
            );
            return Err(ApiError::Upstream("Paystack request failed".into()));
        }

        let envelope: PaystackResponse<VerifyTransactionData> = resp
            .json()
            .await
            .map_err(|_| ApiError::Upstream("Invalid Paystack verify response".into()))?;

        Ok(envelope.status
            && envelope
                .data
                .map(|d| d.status == "success")
                .unwrap_or(false))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|_| ApiError::Internal("Invalid Paystack endpoint".into()))
    }

    fn secret(&self) -> Result<&SecretString, ApiError> {
        // Live mode is validated at startup; this guards direct construction.
        self.secret_key
            .as_ref()
            .ok_or_else(|| ApiError::Internal("Paystack secret key not configured".into()))
    }
}
