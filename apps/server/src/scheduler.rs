//! Background scheduler for periodic rate table reloads.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::main_lib::AppState;

/// Starts reloading the rate table every `every`. The first reload happens one
/// interval after startup since `build_state` already loaded the table.
pub fn start_rates_refresh_scheduler(state: Arc<AppState>, every: Duration) {
    info!("Rate table refresh scheduled every {}s", every.as_secs());
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            debug!("Scheduled rate table refresh starting");
            match state.rate_table_service.refresh().await {
                Ok(summary) => debug!(total = summary.total, "Scheduled rate table refresh done"),
                // Previous snapshot stays active
                Err(e) => warn!("Scheduled rate table refresh failed: {}", e),
            }
        }
    });
}
