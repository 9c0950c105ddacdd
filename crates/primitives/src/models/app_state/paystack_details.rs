use eyre::eyre;
use eyre::Report;
use secrecy::SecretString;
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Whether the gateway adapter talks to Paystack or simulates it. Selected
/// by the explicit `PAYMENT_MODE` variable, never inferred from a missing
/// credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    Live,
    Mock,
}

impl FromStr for PaymentMode {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "live" => Ok(PaymentMode::Live),
            "mock" => Ok(PaymentMode::Mock),
            other => Err(eyre!("PAYMENT_MODE must be 'live' or 'mock', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaystackInfo {
    pub mode: PaymentMode,
    pub api_url: String,
    pub secret_key: Option<SecretString>,
    pub webhook_secret: Option<SecretString>,

    /// Multiplier applied to booking minor units before transmission, for
    /// deployments settling in a different processor currency.
    pub fx_multiplier: i64,
}

impl PaystackInfo {
    pub fn new() -> Result<Self, Report> {
        let mode = match env::var("PAYMENT_MODE") {
            Ok(raw) => raw.parse::<PaymentMode>()?,
            Err(_) => {
                warn!("PAYMENT_MODE not set, defaulting to mock payments");
                PaymentMode::Mock
            }
        };

        let secret_key = env::var("PAYSTACK_SECRET_KEY")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| SecretString::new(s.into()));

        if mode == PaymentMode::Live && secret_key.is_none() {
            return Err(eyre!(
                "PAYMENT_MODE=live requires PAYSTACK_SECRET_KEY to be set"
            ));
        }

        Ok(Self {
            mode,
            api_url: env::var("PAYSTACK_API_URL")
                .unwrap_or_else(|_| "https://api.paystack.co".into()),
            secret_key,
            webhook_secret: env::var("PAYSTACK_WEBHOOK_SECRET")
                .ok()
                .filter(|s| !s.is_empty())
                .map(|s| SecretString::new(s.into())),
            fx_multiplier: env::var("PAYSTACK_FX_MULTIPLIER")
                .unwrap_or_else(|_| "1".into())
                .parse()?,
        })
    }
}
