pub mod announcement;
pub mod auth;
pub mod event;
pub mod health;
pub mod notification;
pub mod payment;
pub mod project;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register enterprise (public)
/// /auth/login                         login (public)
/// /auth/me                            authenticated profile
///
/// /users                              list, add member
/// /users/{id}                         update member (PUT)
/// /users/{id}/deactivate              deactivate member (POST)
///
/// /projects                           list, create
/// /tasks                              list, create
/// /tasks/{id}/complete                complete (POST)
/// /payments                           list, create
/// /payments/{id}/pay                  settle (POST)
/// /events                             list, create
/// /announcements                      list, create
///
/// /notifications                      list
/// /notifications/read-all             mark all read (POST)
/// /notifications/unread-count         unread badge count
/// /notifications/{id}/read            mark read (POST)
/// /notifications/settings             get, update (GET, PUT)
/// /notifications/check                on-demand reminder sweep (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/payments", payment::router())
        .nest("/events", event::router())
        .nest("/announcements", announcement::router())
        .nest("/notifications", notification::router())
}
