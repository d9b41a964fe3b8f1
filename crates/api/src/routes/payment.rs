//! Route definitions for the `/payments` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payments`.
///
/// ```text
/// GET    /            -> list_payments
/// POST   /            -> create_payment
/// POST   /{id}/pay    -> mark_paid
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(payment::list_payments).post(payment::create_payment))
        .route("/{id}/pay", post(payment::mark_paid))
}
