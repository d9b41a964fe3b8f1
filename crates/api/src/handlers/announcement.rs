//! Handlers for the `/announcements` resource.
//!
//! Creating an announcement also fans out a generic notification to every
//! member of the enterprise so the notice shows up in their feed.

use axum::extract::State;
use axum::Json;
use morada_core::kinds::KIND_GENERIC;
use morada_db::models::announcement::CreateAnnouncement;
use morada_db::repositories::{AnnouncementRepo, NotificationRepo, UserRepo};

use crate::error::AppResult;
use crate::handlers::{current_user, enterprise_scope_of, require_manager};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/announcements
///
/// List the caller's enterprise announcements.
pub async fn list_announcements(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let announcements = AnnouncementRepo::list_for_enterprise(&state.pool, scope).await?;
    Ok(Json(serde_json::json!({ "data": announcements })))
}

/// POST /api/v1/announcements
///
/// Publish an announcement and notify the enterprise members. Managing
/// accounts only.
pub async fn create_announcement(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let announcement = AnnouncementRepo::create(&state.pool, scope, user.id, &input).await?;

    // Notify every other member. A failure here is logged but does not
    // roll back the announcement itself.
    let members = UserRepo::list_members_of_enterprise(&state.pool, scope).await?;
    for member in members.iter().filter(|m| m.id != user.id) {
        if let Err(e) = NotificationRepo::create(
            &state.pool,
            member.id,
            KIND_GENERIC,
            &announcement.title,
            &announcement.body,
            Some(announcement.id),
        )
        .await
        {
            tracing::error!(
                user_id = member.id,
                announcement_id = announcement.id,
                error = %e,
                "Failed to notify member about announcement"
            );
        }
    }

    Ok(Json(serde_json::json!({ "data": announcement })))
}
