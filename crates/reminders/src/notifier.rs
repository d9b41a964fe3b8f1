//! Deduplicating notification writer.
//!
//! A reminder for a given record is written at most once per trailing
//! 24-hour window per user. The recency check and the insert are a single
//! SQL statement (see `NotificationRepo::create_if_absent`), so overlapping
//! sweeps cannot both observe "no recent notification" between separate
//! read and write statements.

use chrono::{Duration, Utc};
use morada_core::due::DueReminder;
use morada_core::kinds::{KIND_EVENT, KIND_PAYMENT, KIND_TASK_DEADLINE};
use morada_core::types::DbId;
use morada_db::repositories::NotificationRepo;
use morada_db::DbPool;

/// Trailing window within which a reminder for the same record is
/// suppressed.
pub const DEDUP_LOOKBACK_HOURS: i64 = 24;

/// Write a reminder notification unless one for the same
/// `(user, kind, record)` was created within the last 24 hours.
///
/// Returns `true` when a row was inserted.
pub async fn notify_if_new(
    pool: &DbPool,
    user_id: DbId,
    kind: &str,
    reminder: &DueReminder,
) -> Result<bool, sqlx::Error> {
    let since = Utc::now() - Duration::hours(DEDUP_LOOKBACK_HOURS);
    let title = title_for(kind);
    let message = message_for(kind, reminder);

    let created = NotificationRepo::create_if_absent(
        pool,
        user_id,
        kind,
        reminder.id,
        title,
        &message,
        since,
    )
    .await?;

    if let Some(notification_id) = created {
        tracing::debug!(
            user_id,
            kind,
            reference_id = reminder.id,
            notification_id,
            "Reminder notification created"
        );
    }

    Ok(created.is_some())
}

/// User-facing notification title per kind (product locale is pt-BR).
fn title_for(kind: &str) -> &'static str {
    match kind {
        KIND_PAYMENT => "Pagamento próximo do vencimento",
        KIND_EVENT => "Evento se aproximando",
        KIND_TASK_DEADLINE => "Tarefa com prazo próximo",
        _ => "Lembrete",
    }
}

/// User-facing notification message embedding the record title and the
/// computed days-left count.
fn message_for(kind: &str, reminder: &DueReminder) -> String {
    match kind {
        KIND_PAYMENT => format!(
            "O pagamento \"{}\" vence em {} dia(s).",
            reminder.title, reminder.days_left
        ),
        KIND_EVENT => format!(
            "O evento \"{}\" acontece em {} dia(s).",
            reminder.title, reminder.days_left
        ),
        KIND_TASK_DEADLINE => format!(
            "A tarefa \"{}\" vence em {} dia(s).",
            reminder.title, reminder.days_left
        ),
        _ => format!("\"{}\" em {} dia(s).", reminder.title, reminder.days_left),
    }
}
