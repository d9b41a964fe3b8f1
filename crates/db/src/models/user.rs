//! User entity model and DTOs.

use morada_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    /// One of the `morada_core::roles` account-type constants.
    pub account_type: String,
    /// The enterprise this account belongs to. `None` for tenant-root
    /// accounts (their own id is the scope) and for orphaned members.
    pub parent_enterprise_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// The enterprise scope this user's tenant-wide records live under.
    pub fn enterprise_scope(&self) -> Option<DbId> {
        morada_core::scope::resolve_scope(&self.account_type, self.id, self.parent_enterprise_id)
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub account_type: String,
    pub parent_enterprise_id: Option<DbId>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            account_type: user.account_type,
            parent_enterprise_id: user.parent_enterprise_id,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub account_type: String,
    pub parent_enterprise_id: Option<DbId>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub account_type: Option<String>,
    pub is_active: Option<bool>,
}
