//! Repository for the `payments` table.

use morada_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::payment::{CreatePayment, Payment};

/// Column list for `payments` queries.
const COLUMNS: &str = "id, enterprise_id, user_id, title, amount_cents, due_date, \
                       paid, paid_at, created_at, updated_at";

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Insert a new payment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        enterprise_id: DbId,
        input: &CreatePayment,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (enterprise_id, user_id, title, amount_cents, due_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(enterprise_id)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(input.amount_cents)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an enterprise's payments, nearest due date first.
    pub async fn list_for_enterprise(
        pool: &PgPool,
        enterprise_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments
             WHERE enterprise_id = $1
             ORDER BY due_date"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(enterprise_id)
            .fetch_all(pool)
            .await
    }

    /// Unpaid payments for an enterprise with a due date inside `[from, to]`.
    ///
    /// This is the reminder sweep's candidate query; settled payments are
    /// excluded regardless of due date.
    pub async fn list_unpaid_between(
        pool: &PgPool,
        enterprise_id: DbId,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments
             WHERE enterprise_id = $1
               AND paid = false
               AND due_date >= $2
               AND due_date <= $3
             ORDER BY due_date"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(enterprise_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Mark a payment as settled.
    ///
    /// Returns `true` if the payment existed and was still unpaid.
    pub async fn mark_paid(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE payments
             SET paid = true, paid_at = NOW(), updated_at = NOW()
             WHERE id = $1 AND paid = false",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
