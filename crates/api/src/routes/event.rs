//! Route definitions for the `/events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::event;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// GET    /   -> list_events
/// POST   /   -> create_event
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(event::list_events).post(event::create_event))
}
