//! Periodic reminder sweep scheduler.
//!
//! Runs as a background task, driving [`ReminderSweep`] on a fixed
//! interval. The loop exits gracefully when the provided
//! [`CancellationToken`] is cancelled.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use morada_db::DbPool;

use crate::sweep::ReminderSweep;

/// Default interval between sweeps.
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Background service that runs the reminder sweep periodically.
pub struct ReminderScheduler {
    sweep: ReminderSweep,
}

impl ReminderScheduler {
    /// Create a new scheduler with the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self {
            sweep: ReminderSweep::new(pool),
        }
    }

    /// Run the sweep loop until `cancel` is triggered.
    ///
    /// The interval defaults to one hour and can be overridden via the
    /// `REMINDER_SWEEP_INTERVAL_SECS` environment variable.
    pub async fn run(&self, cancel: CancellationToken) {
        let interval_secs: u64 = std::env::var("REMINDER_SWEEP_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS);

        tracing::info!(interval_secs, "Reminder scheduler started");

        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Reminder scheduler stopping");
                    break;
                }
                _ = interval.tick() => {
                    match self.sweep.run_for_all_users().await {
                        Ok(summary) => {
                            if summary.notifications_created > 0 {
                                tracing::info!(
                                    notifications_created = summary.notifications_created,
                                    "Scheduled reminder sweep wrote notifications"
                                );
                            }
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "Scheduled reminder sweep failed");
                        }
                    }
                }
            }
        }
    }
}
