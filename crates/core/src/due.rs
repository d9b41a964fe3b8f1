//! Due-date threshold evaluation for reminder sweeps.
//!
//! Pure logic -- no database access. The caller is responsible for fetching
//! candidate rows (payments, calendar events, tasks) and mapping them into
//! [`DueItem`]s before calling [`select_due`].

use chrono::Duration;

use crate::types::{DbId, Timestamp};

/// Seconds in a day, used by the days-left ceiling computation.
const SECS_PER_DAY: i64 = 86_400;

/// A candidate record with a due instant, abstracted over the three
/// reminder domains.
///
/// Calendar events carry no completion state; callers pass
/// `completed: false` for them.
#[derive(Debug, Clone)]
pub struct DueItem {
    pub id: DbId,
    pub title: String,
    /// The instant the record falls due. `None` means the record cannot be
    /// evaluated and is excluded from selection entirely.
    pub due_at: Option<Timestamp>,
    /// Completion state for payments/tasks; excludes the item when `true`.
    pub completed: bool,
}

/// An item selected by [`select_due`], with its display-facing day count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    pub id: DbId,
    pub title: String,
    /// Whole days until the due instant, rounded up. Zero when the item is
    /// due at `now` exactly.
    pub days_left: i64,
}

/// Resolve the lookahead window from a settings flag pair.
///
/// The 14-day flag takes precedence when both are set; 7 days is the
/// implicit default when neither is.
pub fn window_days(days_14: bool, days_7: bool) -> i64 {
    if days_14 {
        14
    } else if days_7 {
        7
    } else {
        // Neither flag explicitly set: 7-day default.
        7
    }
}

/// Whole days until `due`, rounded up, for display in reminder messages.
///
/// `due == now` yields 0. Callers only pass instants at or after `now`.
pub fn days_left(due: Timestamp, now: Timestamp) -> i64 {
    let secs = (due - now).num_seconds().max(0);
    (secs + SECS_PER_DAY - 1).div_euclid(SECS_PER_DAY)
}

/// Select the items falling due within `[now, now + window_days]`.
///
/// Both window boundaries are inclusive. Completed items and items with no
/// due instant are excluded. Input order is preserved; callers wanting a
/// sorted presentation sort by ascending `days_left` themselves.
pub fn select_due(items: &[DueItem], now: Timestamp, window_days: i64) -> Vec<DueReminder> {
    let window_end = now + Duration::days(window_days);

    items
        .iter()
        .filter(|item| !item.completed)
        .filter_map(|item| {
            let due = item.due_at?;
            if due >= now && due <= window_end {
                Some(DueReminder {
                    id: item.id,
                    title: item.title.clone(),
                    days_left: days_left(due, now),
                })
            } else {
                None
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
