//! Reminder sweep orchestration.
//!
//! For every active user: resolve the enterprise scope, load the user's
//! reminder settings (or the defaults), and for each enabled domain select
//! the records falling due inside the configured window and notify about
//! each one. One user's failure is logged and does not abort the others.

use chrono::{Duration, Utc};
use serde::Serialize;

use morada_core::due::{self, DueItem};
use morada_core::kinds::{KIND_EVENT, KIND_PAYMENT, KIND_TASK_DEADLINE};
use morada_core::types::{DbId, Timestamp};
use morada_db::models::notification::NotificationSettings;
use morada_db::models::user::User;
use morada_db::repositories::{
    EventRepo, NotificationSettingsRepo, PaymentRepo, TaskRepo, UserRepo,
};
use morada_db::DbPool;

use crate::notifier;

/// Outcome counters for one sweep invocation.
#[derive(Debug, Default, Clone, Serialize)]
pub struct SweepSummary {
    /// Users whose domains were evaluated.
    pub users_processed: u64,
    /// Users skipped because no enterprise scope could be resolved.
    pub users_skipped: u64,
    /// Users whose processing failed (logged, not propagated).
    pub users_failed: u64,
    /// Notification rows written across all users.
    pub notifications_created: u64,
}

/// Evaluates reminder thresholds and writes notifications.
pub struct ReminderSweep {
    pool: DbPool,
}

impl ReminderSweep {
    /// Create a new sweep over the given database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Sweep every active user.
    ///
    /// Fails only when the user list itself cannot be loaded; per-user
    /// errors are logged and counted in the summary.
    pub async fn run_for_all_users(&self) -> Result<SweepSummary, sqlx::Error> {
        let users = UserRepo::list_active(&self.pool).await?;
        let mut summary = SweepSummary::default();

        for user in &users {
            match self.run_for_user(user).await {
                Ok(Some(created)) => {
                    summary.users_processed += 1;
                    summary.notifications_created += created;
                }
                Ok(None) => summary.users_skipped += 1,
                Err(e) => {
                    tracing::error!(user_id = user.id, error = %e, "Reminder sweep failed for user");
                    summary.users_failed += 1;
                }
            }
        }

        tracing::info!(
            users_processed = summary.users_processed,
            users_skipped = summary.users_skipped,
            users_failed = summary.users_failed,
            notifications_created = summary.notifications_created,
            "Reminder sweep finished"
        );

        Ok(summary)
    }

    /// Sweep a single user.
    ///
    /// Returns `Ok(None)` when the user has no resolvable enterprise scope
    /// (nothing to evaluate), otherwise the number of notifications created.
    /// The three domain checks run concurrently.
    pub async fn run_for_user(&self, user: &User) -> Result<Option<u64>, sqlx::Error> {
        let Some(scope) = user.enterprise_scope() else {
            return Ok(None);
        };

        let settings = NotificationSettingsRepo::get(&self.pool, user.id)
            .await?
            .unwrap_or_else(|| NotificationSettings::defaults(user.id));

        let now = Utc::now();

        let (payments, events, tasks) = tokio::join!(
            self.check_payments(user.id, scope, &settings, now),
            self.check_events(user.id, scope, &settings, now),
            self.check_tasks(user.id, &settings, now),
        );

        Ok(Some(payments? + events? + tasks?))
    }

    /// Unpaid payments for the user's enterprise falling due in the window.
    async fn check_payments(
        &self,
        user_id: DbId,
        scope: DbId,
        settings: &NotificationSettings,
        now: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        if !settings.payments_enabled {
            return Ok(0);
        }
        let window = due::window_days(settings.payment_days_14, settings.payment_days_7);
        let payments =
            PaymentRepo::list_unpaid_between(&self.pool, scope, now, now + Duration::days(window))
                .await?;

        let items: Vec<DueItem> = payments
            .into_iter()
            .map(|p| DueItem {
                id: p.id,
                title: p.title,
                due_at: Some(p.due_date),
                completed: p.paid,
            })
            .collect();

        self.notify_selected(user_id, KIND_PAYMENT, &items, now, window)
            .await
    }

    /// Calendar events for the user's enterprise starting in the window.
    async fn check_events(
        &self,
        user_id: DbId,
        scope: DbId,
        settings: &NotificationSettings,
        now: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        if !settings.events_enabled {
            return Ok(0);
        }
        let window = due::window_days(settings.event_days_14, settings.event_days_7);
        let events =
            EventRepo::list_between(&self.pool, scope, now, now + Duration::days(window)).await?;

        let items: Vec<DueItem> = events
            .into_iter()
            .map(|e| DueItem {
                id: e.id,
                title: e.title,
                // Events carry no completion state.
                due_at: Some(e.starts_at),
                completed: false,
            })
            .collect();

        self.notify_selected(user_id, KIND_EVENT, &items, now, window)
            .await
    }

    /// Open tasks assigned to the user with a deadline in the window.
    async fn check_tasks(
        &self,
        user_id: DbId,
        settings: &NotificationSettings,
        now: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        if !settings.tasks_enabled {
            return Ok(0);
        }
        let window = due::window_days(settings.task_days_14, settings.task_days_7);
        let tasks = TaskRepo::list_open_for_assignee_between(
            &self.pool,
            user_id,
            now,
            now + Duration::days(window),
        )
        .await?;

        let items: Vec<DueItem> = tasks
            .into_iter()
            .map(|t| DueItem {
                id: t.id,
                title: t.title,
                due_at: t.due_date,
                completed: t.completed,
            })
            .collect();

        self.notify_selected(user_id, KIND_TASK_DEADLINE, &items, now, window)
            .await
    }

    /// Run the threshold evaluator over the candidates and notify about
    /// each selected record, counting the rows actually written.
    async fn notify_selected(
        &self,
        user_id: DbId,
        kind: &str,
        items: &[DueItem],
        now: Timestamp,
        window: i64,
    ) -> Result<u64, sqlx::Error> {
        let mut created = 0;
        for reminder in due::select_due(items, now, window) {
            if notifier::notify_if_new(&self.pool, user_id, kind, &reminder).await? {
                created += 1;
            }
        }
        Ok(created)
    }
}
