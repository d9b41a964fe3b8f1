//! Repository for the `notification_settings` table.

use morada_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::NotificationSettings;

/// Column list for `notification_settings` queries.
const COLUMNS: &str = "id, user_id, payments_enabled, payment_days_14, payment_days_7, \
                       events_enabled, event_days_14, event_days_7, \
                       tasks_enabled, task_days_14, task_days_7, created_at, updated_at";

/// Provides read/write access to per-user reminder settings.
pub struct NotificationSettingsRepo;

impl NotificationSettingsRepo {
    /// Get the stored settings for a user.
    ///
    /// Returns `None` when the user has never saved settings; callers fall
    /// back to [`NotificationSettings::defaults`].
    pub async fn get(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<NotificationSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notification_settings WHERE user_id = $1");
        sqlx::query_as::<_, NotificationSettings>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or replace a user's settings wholesale.
    ///
    /// Every flag column is overwritten; a save never merges with the
    /// previously stored row.
    pub async fn upsert(
        pool: &PgPool,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_settings
                (user_id, payments_enabled, payment_days_14, payment_days_7,
                 events_enabled, event_days_14, event_days_7,
                 tasks_enabled, task_days_14, task_days_7)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (user_id) DO UPDATE SET
                payments_enabled = EXCLUDED.payments_enabled,
                payment_days_14 = EXCLUDED.payment_days_14,
                payment_days_7 = EXCLUDED.payment_days_7,
                events_enabled = EXCLUDED.events_enabled,
                event_days_14 = EXCLUDED.event_days_14,
                event_days_7 = EXCLUDED.event_days_7,
                tasks_enabled = EXCLUDED.tasks_enabled,
                task_days_14 = EXCLUDED.task_days_14,
                task_days_7 = EXCLUDED.task_days_7,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationSettings>(&query)
            .bind(settings.user_id)
            .bind(settings.payments_enabled)
            .bind(settings.payment_days_14)
            .bind(settings.payment_days_7)
            .bind(settings.events_enabled)
            .bind(settings.event_days_14)
            .bind(settings.event_days_7)
            .bind(settings.tasks_enabled)
            .bind(settings.task_days_14)
            .bind(settings.task_days_7)
            .fetch_one(pool)
            .await
    }
}
