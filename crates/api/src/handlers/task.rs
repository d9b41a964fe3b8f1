//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use morada_core::error::CoreError;
use morada_core::types::DbId;
use morada_db::models::task::CreateTask;
use morada_db::repositories::TaskRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{current_user, enterprise_scope_of, require_manager};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/tasks
///
/// List the caller's enterprise tasks.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let tasks = TaskRepo::list_for_enterprise(&state.pool, scope).await?;
    Ok(Json(serde_json::json!({ "data": tasks })))
}

/// POST /api/v1/tasks
///
/// Create a task in the caller's enterprise. Managing accounts only.
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let task = TaskRepo::create(&state.pool, scope, &input).await?;
    Ok(Json(serde_json::json!({ "data": task })))
}

/// POST /api/v1/tasks/{id}/complete
///
/// Mark a task completed. Any member of the owning enterprise may complete
/// it. Returns 204, or 404 when the task is unknown, already completed, or
/// belongs to another enterprise.
pub async fn complete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let task = TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }))?;
    if task.enterprise_id != scope {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }));
    }

    let found = TaskRepo::complete(&state.pool, task_id).await?;
    if !found {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Task",
            id: task_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
