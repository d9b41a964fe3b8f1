//! Calendar event entity model and DTOs.

use morada_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// Events have no completion state; once `starts_at` passes they simply
/// stop matching the reminder window.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub enterprise_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a calendar event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub description: Option<String>,
    pub starts_at: Timestamp,
    pub location: Option<String>,
}
