//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use morada_core::error::CoreError;
use morada_core::types::DbId;
use morada_db::models::notification::{NotificationSettings, SaveNotificationSettings};
use morada_db::repositories::{NotificationRepo, NotificationSettingsRepo};
use morada_reminders::ReminderSweep;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::current_user;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query / request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

// ---------------------------------------------------------------------------
// Notification CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications
///
/// List the authenticated user's notifications with optional filtering.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let unread_only = params.unread_only.unwrap_or(false);

    let notifications =
        NotificationRepo::list_for_user(&state.pool, auth.user_id, unread_only, limit, offset)
            .await?;

    Ok(Json(serde_json::json!({ "data": notifications })))
}

/// POST /api/v1/notifications/{id}/read
///
/// Mark a single notification as read. Returns 204 No Content on success,
/// or 404 if the notification does not belong to the authenticated user.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = NotificationRepo::mark_read(&state.pool, notification_id, auth.user_id).await?;

    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id: notification_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/notifications/read-all
///
/// Mark all of the authenticated user's notifications as read.
/// Returns the number of notifications that were marked.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::mark_all_read(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "marked_read": count }
    })))
}

/// GET /api/v1/notifications/unread-count
///
/// Return the number of unread notifications for the authenticated user.
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let count = NotificationRepo::unread_count(&state.pool, auth.user_id).await?;

    Ok(Json(serde_json::json!({
        "data": { "count": count }
    })))
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications/settings
///
/// Get the authenticated user's reminder settings. Users who never saved
/// settings get the defaults.
pub async fn get_settings(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let settings = NotificationSettingsRepo::get(&state.pool, auth.user_id)
        .await?
        .unwrap_or_else(|| NotificationSettings::defaults(auth.user_id));

    Ok(Json(serde_json::json!({ "data": settings })))
}

/// PUT /api/v1/notifications/settings
///
/// Save the authenticated user's reminder settings. The stored row is
/// replaced wholesale; omitted fields fall back to the defaults rather
/// than the previously stored values.
pub async fn update_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveNotificationSettings>,
) -> AppResult<Json<serde_json::Value>> {
    let d = NotificationSettings::defaults(auth.user_id);
    let settings = NotificationSettings {
        payments_enabled: input.payments_enabled.unwrap_or(d.payments_enabled),
        payment_days_14: input.payment_days_14.unwrap_or(d.payment_days_14),
        payment_days_7: input.payment_days_7.unwrap_or(d.payment_days_7),
        events_enabled: input.events_enabled.unwrap_or(d.events_enabled),
        event_days_14: input.event_days_14.unwrap_or(d.event_days_14),
        event_days_7: input.event_days_7.unwrap_or(d.event_days_7),
        tasks_enabled: input.tasks_enabled.unwrap_or(d.tasks_enabled),
        task_days_14: input.task_days_14.unwrap_or(d.task_days_14),
        task_days_7: input.task_days_7.unwrap_or(d.task_days_7),
        ..d
    };

    let stored = NotificationSettingsRepo::upsert(&state.pool, &settings).await?;

    Ok(Json(serde_json::json!({ "data": stored })))
}

// ---------------------------------------------------------------------------
// On-demand sweep
// ---------------------------------------------------------------------------

/// POST /api/v1/notifications/check
///
/// Run the reminder sweep for the authenticated user only and return the
/// number of notifications created. Users without a resolvable enterprise
/// scope get a zero count.
pub async fn check_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;

    let sweep = ReminderSweep::new(state.pool.clone());
    let created = sweep.run_for_user(&user).await?.unwrap_or(0);

    Ok(Json(serde_json::json!({
        "data": { "notifications_created": created }
    })))
}
