//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use morada_db::models::project::CreateProject;
use morada_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::handlers::{current_user, enterprise_scope_of, require_manager};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/v1/projects
///
/// List the caller's enterprise projects.
pub async fn list_projects(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    let scope = enterprise_scope_of(&user)?;

    let projects = ProjectRepo::list_for_enterprise(&state.pool, scope).await?;
    Ok(Json(serde_json::json!({ "data": projects })))
}

/// POST /api/v1/projects
///
/// Create a project in the caller's enterprise. Managing accounts only.
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<serde_json::Value>> {
    let user = current_user(&state, &auth).await?;
    require_manager(&user)?;
    let scope = enterprise_scope_of(&user)?;

    let project = ProjectRepo::create(&state.pool, scope, &input).await?;
    Ok(Json(serde_json::json!({ "data": project })))
}
