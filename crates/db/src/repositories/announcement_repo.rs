//! Repository for the `announcements` table.

use morada_core::types::DbId;
use sqlx::PgPool;

use crate::models::announcement::{Announcement, CreateAnnouncement};

/// Column list for `announcements` queries.
const COLUMNS: &str = "id, enterprise_id, author_user_id, title, body, created_at, updated_at";

/// Provides CRUD operations for announcements.
pub struct AnnouncementRepo;

impl AnnouncementRepo {
    /// Insert a new announcement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        enterprise_id: DbId,
        author_user_id: DbId,
        input: &CreateAnnouncement,
    ) -> Result<Announcement, sqlx::Error> {
        let query = format!(
            "INSERT INTO announcements (enterprise_id, author_user_id, title, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(enterprise_id)
            .bind(author_user_id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// List an enterprise's announcements, newest first.
    pub async fn list_for_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<Announcement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM announcements
             WHERE enterprise_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Announcement>(&query)
            .bind(enterprise_id)
            .fetch_all(pool)
            .await
    }
}
