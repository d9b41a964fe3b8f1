//! Route definitions for the `/users` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                  -> list_members
/// POST   /                  -> add_member
/// PUT    /{id}              -> update_member
/// POST   /{id}/deactivate   -> deactivate_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list_members).post(user::add_member))
        .route("/{id}", put(user::update_member))
        .route("/{id}/deactivate", post(user::deactivate_member))
}
