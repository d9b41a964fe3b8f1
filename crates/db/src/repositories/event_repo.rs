//! Repository for the `events` table.

use morada_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};

/// Column list for `events` queries.
const COLUMNS: &str =
    "id, enterprise_id, title, description, starts_at, location, created_at, updated_at";

/// Provides CRUD operations for calendar events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        enterprise_id: DbId,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (enterprise_id, title, description, starts_at, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(enterprise_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.starts_at)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find an event by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an enterprise's events, soonest first.
    pub async fn list_for_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE enterprise_id = $1
             ORDER BY starts_at"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(enterprise_id)
            .fetch_all(pool)
            .await
    }

    /// Events for an enterprise starting inside `[from, to]`.
    ///
    /// This is the reminder sweep's candidate query.
    pub async fn list_between(
        pool: &PgPool,
        enterprise_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE enterprise_id = $1
               AND starts_at >= $2
               AND starts_at <= $3
             ORDER BY starts_at"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(enterprise_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
