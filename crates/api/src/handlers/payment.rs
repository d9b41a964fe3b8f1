//! Handlers for the `/payments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use morada_core::error::CoreError;
use morada_core::types::DbId;
use morada_db::models::payment::CreatePayment;
use morada_db::repositories::PaymentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{current_user, enterprise_scope_of, require_manager};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/payments
///
/// List the caller's enterprise payments.
pub async fn list_payments(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let payments = PaymentRepo::list_for_enterprise(&state.pool, scope).await?;
    Ok(Json(serde_json::json!({ "data": payments })))
}

/// POST /api/v1/payments
///
/// Create a payment in the caller's enterprise. Managing accounts only.
pub async fn create_payment(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreatePayment>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    if input.amount_cents < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Payment amount must not be negative".into(),
        )));
    }

    let payment = PaymentRepo::create(&state.pool, scope, &input).await?;
    Ok(Json(serde_json::json!({ "data": payment })))
}

/// POST /api/v1/payments/{id}/pay
///
/// Mark a payment as settled. Managing accounts only. Returns 204, or 404
/// when the payment is unknown, already settled, or belongs to another
/// enterprise.
pub async fn mark_paid(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(payment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let payment = PaymentRepo::find_by_id(&state.pool, payment_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id: payment_id,
        }))?;
    if payment.enterprise_id != scope {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id: payment_id,
        }));
    }

    let found = PaymentRepo::mark_paid(&state.pool, payment_id).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Payment",
            id: payment_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
