//! Notification entity models and DTOs.

use morada_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// One of the `morada_core::kinds` constants.
    pub kind: String,
    pub title: String,
    pub message: String,
    /// Id of the payment/event/task that triggered this notification.
    /// `None` for generic notifications.
    pub reference_id: Option<DbId>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `notification_settings` table.
///
/// Per domain: an enable flag plus the 14-day and 7-day window flags.
/// The 14-day flag wins when both are set; 7 days is the implicit default.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationSettings {
    pub id: DbId,
    pub user_id: DbId,
    pub payments_enabled: bool,
    pub payment_days_14: bool,
    pub payment_days_7: bool,
    pub events_enabled: bool,
    pub event_days_14: bool,
    pub event_days_7: bool,
    pub tasks_enabled: bool,
    pub task_days_14: bool,
    pub task_days_7: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NotificationSettings {
    /// The default configuration applied when a user has never saved
    /// settings: every domain enabled on the 7-day window.
    ///
    /// This is the single explicit defaults constant; the sweep and the
    /// settings GET handler both go through it rather than assuming
    /// defaults ambiently. The returned value is not persisted (`id` is 0)
    /// until the user saves settings.
    pub fn defaults(user_id: DbId) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: 0,
            user_id,
            payments_enabled: true,
            payment_days_14: false,
            payment_days_7: true,
            events_enabled: true,
            event_days_14: false,
            event_days_7: true,
            tasks_enabled: true,
            task_days_14: false,
            task_days_7: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// DTO for saving notification settings.
///
/// Settings are replaced wholesale on save; fields the caller omits fall
/// back to the defaults, not to the previously stored value.
#[derive(Debug, Deserialize)]
pub struct SaveNotificationSettings {
    pub payments_enabled: Option<bool>,
    pub payment_days_14: Option<bool>,
    pub payment_days_7: Option<bool>,
    pub events_enabled: Option<bool>,
    pub event_days_14: Option<bool>,
    pub event_days_7: Option<bool>,
    pub tasks_enabled: Option<bool>,
    pub task_days_14: Option<bool>,
    pub task_days_7: Option<bool>,
}
