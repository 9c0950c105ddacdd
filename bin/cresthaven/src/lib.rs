mod observability;

pub mod utility;

pub use cresthaven_primitives::error::ApiError;

use crate::utility::clean_up_tasks::spawn_background_tasks;
use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, load_env};
use cresthaven_core::app_state::AppState;
use cresthaven_primitives::models::app_state::AppConfig;
use eyre::Report;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting Cresthaven application...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. build application state
    let state = AppState::new(pool, config)?;

    // 6. start background maintenance tasks
    spawn_background_tasks(state.clone());

    // 7. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 8. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 9. start HTTP server
    serve(app).await?;

    info!("Cresthaven application shut down gracefully");
    Ok(())
}
