//! Shared seeding helpers for reminder integration tests.

#![allow(dead_code)]

use morada_core::roles::{ACCOUNT_ENTERPRISE, ACCOUNT_USER};
use morada_core::types::DbId;
use morada_db::models::user::{CreateUser, User};
use morada_db::repositories::UserRepo;
use sqlx::PgPool;

/// Insert an enterprise (tenant root) account.
pub async fn seed_enterprise(pool: &PgPool, name: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "$argon2id$test".to_string(),
            account_type: ACCOUNT_ENTERPRISE.to_string(),
            parent_enterprise_id: None,
        },
    )
    .await
    .expect("seed enterprise")
}

/// Insert a member account belonging to `parent_enterprise_id` (or to no
/// enterprise when `None`).
pub async fn seed_member(pool: &PgPool, name: &str, parent_enterprise_id: Option<DbId>) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "$argon2id$test".to_string(),
            account_type: ACCOUNT_USER.to_string(),
            parent_enterprise_id,
        },
    )
    .await
    .expect("seed member")
}

/// Total notification rows for a user.
pub async fn notification_count(pool: &PgPool, user_id: DbId) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count notifications")
}
