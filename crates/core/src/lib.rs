//! Pure domain logic for the morada platform.
//!
//! No database access anywhere in this crate. Callers (the `morada-db`
//! repositories and the `morada-reminders` sweep) fetch rows and pass
//! plain data in.

pub mod due;
pub mod error;
pub mod kinds;
pub mod roles;
pub mod scope;
pub mod types;
