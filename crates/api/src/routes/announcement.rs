//! Route definitions for the `/announcements` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::announcement;
use crate::state::AppState;

/// Routes mounted at `/announcements`.
///
/// ```text
/// GET    /   -> list_announcements
/// POST   /   -> create_announcement
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(announcement::list_announcements).post(announcement::create_announcement),
    )
}
