//! Tenant scope resolution.
//!
//! Pure logic -- no database access. The caller fetches the user row and
//! passes its fields in.

use crate::roles::ACCOUNT_ENTERPRISE;
use crate::types::DbId;

/// Resolve the enterprise scope a user belongs to.
///
/// An enterprise (tenant root) account is its own scope; every other
/// account inherits the enterprise it was created under. Returns `None`
/// when a non-root account has no parent reference -- not an error, the
/// caller simply skips tenant-scoped processing for that user.
pub fn resolve_scope(
    account_type: &str,
    user_id: DbId,
    parent_enterprise_id: Option<DbId>,
) -> Option<DbId> {
    if account_type == ACCOUNT_ENTERPRISE {
        Some(user_id)
    } else {
        parent_enterprise_id
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
