//! Well-known account-type constants.
//!
//! These must match the CHECK constraint on `users.account_type` in
//! `20260301000001_create_users_table.sql`.

/// Tenant root: the paying/owning entity (condominium or company) that
/// member accounts belong to.
pub const ACCOUNT_ENTERPRISE: &str = "enterprise";

/// Administrator account inside an enterprise.
pub const ACCOUNT_ADMIN: &str = "admin";

/// Regular member account.
pub const ACCOUNT_USER: &str = "user";
