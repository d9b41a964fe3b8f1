//! Well-known notification kind constants.
//!
//! These must match the CHECK constraint on `notifications.kind` and the
//! kind values referenced by the reminder sweep and the API handlers.

/// Payment close to its due date.
pub const KIND_PAYMENT: &str = "payment";

/// Upcoming calendar event.
pub const KIND_EVENT: &str = "event";

/// Task approaching its deadline.
pub const KIND_TASK_DEADLINE: &str = "task_deadline";

/// Free-form notification not tied to a due record (e.g. announcements).
pub const KIND_GENERIC: &str = "generic";
