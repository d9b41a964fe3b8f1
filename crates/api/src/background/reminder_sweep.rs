//! Periodic reminder sweep across all tenant users.
//!
//! Thin wrapper that runs [`ReminderScheduler`] as a spawned background
//! task. The interval is configured via `REMINDER_SWEEP_INTERVAL_SECS`
//! (default one hour, see `morada-reminders`).

use morada_reminders::ReminderScheduler;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Run the reminder sweep loop until `cancel` is triggered.
pub async fn run(pool: PgPool, cancel: CancellationToken) {
    ReminderScheduler::new(pool).run(cancel).await;
}
