//! Handlers for the `/users` resource (enterprise membership management).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use morada_core::error::CoreError;
use morada_core::roles::{ACCOUNT_ADMIN, ACCOUNT_USER};
use morada_core::types::DbId;
use morada_db::models::user::{CreateUser, UpdateUser, User, UserResponse};
use morada_db::repositories::UserRepo;
use serde::Deserialize;
use validator::Validate;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::handlers::{current_user, enterprise_scope_of, require_manager};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Minimum password length for new member accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /users` (add a member to the enterprise).
#[derive(Debug, Deserialize, Validate)]
pub struct AddMemberRequest {
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    pub password: String,
    /// `admin` or `user`; a new tenant root cannot be created this way.
    pub account_type: Option<String>,
}

/// Verify the target user belongs to the caller's enterprise.
fn ensure_same_enterprise(target: &User, scope: DbId) -> AppResult<()> {
    let target_scope = target.enterprise_scope();
    if target_scope == Some(scope) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: target.id,
        }))
    }
}

/// GET /api/v1/users
///
/// List the members of the caller's enterprise, including the root account.
pub async fn list_members(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let members = UserRepo::list_members_of_enterprise(&state.pool, scope).await?;
    let members: Vec<UserResponse> = members.into_iter().map(UserResponse::from).collect();

    Ok(Json(serde_json::json!({ "data": members })))
}

/// POST /api/v1/users
///
/// Add a member account to the caller's enterprise. Managing accounts only.
pub async fn add_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddMemberRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let account_type = input.account_type.unwrap_or_else(|| ACCOUNT_USER.to_string());
    if account_type != ACCOUNT_USER && account_type != ACCOUNT_ADMIN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid member account type: {account_type}"
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let member = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            account_type,
            parent_enterprise_id: Some(scope),
        },
    )
    .await?;

    tracing::info!(user_id = member.id, enterprise_id = scope, "Member added");

    Ok(Json(serde_json::json!({ "data": UserResponse::from(member) })))
}

/// PUT /api/v1/users/{id}
///
/// Update a member of the caller's enterprise. Managing accounts only.
pub async fn update_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let target = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    ensure_same_enterprise(&target, scope)?;

    let updated = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;

    Ok(Json(serde_json::json!({ "data": UserResponse::from(updated) })))
}

/// POST /api/v1/users/{id}/deactivate
///
/// Soft-deactivate a member account. Managing accounts only. Returns 204.
pub async fn deactivate_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let target = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    ensure_same_enterprise(&target, scope)?;

    let found = UserRepo::deactivate(&state.pool, user_id).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
