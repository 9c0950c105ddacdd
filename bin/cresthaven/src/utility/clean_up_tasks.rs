use cresthaven_core::AppState;
use cresthaven_primitives::schema::blacklisted_tokens;
use diesel::ExpressionMethods;
use diesel::QueryDsl;
use diesel::RunQueryDsl;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, error, info};

const DAILY_CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60 * 24);

pub fn spawn_background_tasks(state: Arc<AppState>) {
    let state_clone = state.clone();

    // Cleanup expired blacklisted tokens (daily)
    tokio::spawn(async move {
        info!("Starting daily blacklisted tokens cleanup task");
        cleanup_blacklisted_tokens(state_clone).await;
    });

    info!("Background maintenance tasks spawned");
}

async fn cleanup_blacklisted_tokens(state: Arc<AppState>) {
    let mut interval = interval(DAILY_CLEANUP_INTERVAL);
    interval.tick().await;

    loop {
        interval.tick().await;

        let Ok(mut conn) = state.db.get() else {
            error!("Blacklisted token cleanup: DB connection failed");
            continue;
        };

        match diesel::delete(
            blacklisted_tokens::table.filter(blacklisted_tokens::expires_at.lt(diesel::dsl::now)),
        )
        .execute(&mut conn)
        {
            Ok(0) => debug!("No expired blacklisted tokens"),
            Ok(n) => info!("Removed {} blacklisted tokens", n),
            Err(e) => error!("Blacklisted token cleanup failed: {}", e),
        }
    }
}
