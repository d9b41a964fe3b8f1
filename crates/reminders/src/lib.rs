//! Reminder notification infrastructure.
//!
//! This crate turns due-dated records (payments, calendar events, tasks)
//! into per-user notifications:
//!
//! - [`notifier`] -- deduplicating notification writer with the per-kind
//!   message templates.
//! - [`ReminderSweep`] -- evaluates every active user's enabled domains
//!   against their reminder window and writes what is missing.
//! - [`ReminderScheduler`] -- periodic background loop driving the sweep.

pub mod notifier;
pub mod scheduler;
pub mod sweep;

pub use scheduler::ReminderScheduler;
pub use sweep::{ReminderSweep, SweepSummary};
