//! Handlers for the `/events` resource (tenant calendar).

use axum::extract::State;
use axum::Json;
use morada_db::models::event::CreateEvent;
use morada_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::handlers::{current_user, enterprise_scope_of, require_manager};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/events
///
/// List the caller's enterprise calendar events.
pub async fn list_events(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let events = EventRepo::list_for_enterprise(&state.pool, scope).await?;
    Ok(Json(serde_json::json!({ "data": events })))
}

/// POST /api/v1/events
///
/// Create a calendar event in the caller's enterprise. Managing accounts
/// only.
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let event = EventRepo::create(&state.pool, scope, &input).await?;
    Ok(Json(serde_json::json!({ "data": event })))
}
