//! Payment entity model and DTOs.

use morada_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `payments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub enterprise_id: DbId,
    /// The member this charge is addressed to, when it is not
    /// enterprise-wide.
    pub user_id: Option<DbId>,
    pub title: String,
    /// Amount in cents to avoid floating-point money.
    pub amount_cents: i64,
    pub due_date: Timestamp,
    pub paid: bool,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a payment.
#[derive(Debug, Deserialize)]
pub struct CreatePayment {
    pub user_id: Option<DbId>,
    pub title: String,
    pub amount_cents: i64,
    pub due_date: Timestamp,
}
