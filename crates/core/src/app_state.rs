use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

use crate::clients::PaystackClient;
use eyre::Result;
pub use cresthaven_primitives::models::app_state::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub paystack: PaystackClient,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let paystack = PaystackClient::new(http.clone(), &config.paystack_details)?;

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
            paystack,
        }))
    }
}
