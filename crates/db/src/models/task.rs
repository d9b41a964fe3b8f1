//! Task entity model and DTOs.

use morada_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub enterprise_id: DbId,
    pub project_id: Option<DbId>,
    pub assignee_user_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    /// Deadline. `None` means the task is never picked up by the reminder
    /// sweep.
    pub due_date: Option<Timestamp>,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTask {
    pub project_id: Option<DbId>,
    pub assignee_user_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
}
