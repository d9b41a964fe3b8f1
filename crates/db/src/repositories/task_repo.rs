//! Repository for the `tasks` table.

use morada_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task};

/// Column list for `tasks` queries.
const COLUMNS: &str = "id, enterprise_id, project_id, assignee_user_id, title, description, \
                       due_date, completed, completed_at, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(
        pool: &PgPool,
        enterprise_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (enterprise_id, project_id, assignee_user_id, title, description, due_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(enterprise_id)
            .bind(input.project_id)
            .bind(input.assignee_user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a task by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an enterprise's tasks, most recently created first.
    pub async fn list_for_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE enterprise_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(enterprise_id)
            .fetch_all(pool)
            .await
    }

    /// Open tasks assigned to a user with a due date inside `[from, to]`.
    ///
    /// This is the reminder sweep's candidate query; tasks with no due date
    /// never match.
    pub async fn list_open_for_assignee_between(
        pool: &PgPool,
        assignee_user_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE assignee_user_id = $1
               AND completed = false
               AND due_date IS NOT NULL
               AND due_date >= $2
               AND due_date <= $3
             ORDER BY due_date"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(assignee_user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Mark a task completed.
    ///
    /// Returns `true` if the task existed and was still open.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks
             SET completed = true, completed_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND completed = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
