//! HTTP request handlers, one module per resource.

pub mod announcement;
pub mod auth;
pub mod event;
pub mod notification;
pub mod payment;
pub mod project;
pub mod task;
pub mod user;

use morada_core::error::CoreError;
use morada_core::roles::{ACCOUNT_ADMIN, ACCOUNT_ENTERPRISE};
use morada_core::types::DbId;
use morada_db::models::user::User;
use morada_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Load the authenticated user's current row.
///
/// The token only carries the id; handlers that need the account type or
/// enterprise reference re-read the row so revoked/deactivated accounts
/// are caught.
pub(crate) async fn current_user(state: &AppState, auth: &AuthUser) -> AppResult<User> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
        })?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    Ok(user)
}

/// The enterprise scope for tenant-wide reads and writes.
///
/// Fails with 403 when the account is not attached to any enterprise.
pub(crate) fn enterprise_scope_of(user: &User) -> AppResult<DbId> {
    user.enterprise_scope().ok_or_else(|| {
        AppError::Core(CoreError::Forbidden(
            "Account is not attached to an enterprise".into(),
        ))
    })
}

/// Require a managing account (enterprise root or admin).
pub(crate) fn require_manager(user: &User) -> AppResult<()> {
    if user.account_type == ACCOUNT_ENTERPRISE || user.account_type == ACCOUNT_ADMIN {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Managing account required".into(),
        )))
    }
}
