//! Date-window membership test.
//!
//! This module decides whether the next occurrence of a target date falls
//! within a lookahead window of the reference date. Targets are either
//! recurring month/day anniversaries (birthdays) or absolute one-time
//! deadlines (probation end, contract end). All comparisons operate on
//! calendar dates; timezones are the caller's concern.

use chrono::{Datelike, NaiveDate};

/// A successful window membership check.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::evaluation::{check_window, WindowCheck};
/// use chrono::NaiveDate;
///
/// let born = NaiveDate::from_ymd_opt(1990, 6, 10).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
///
/// let check = check_window(born, today, 7, true).unwrap();
/// assert_eq!(check, WindowCheck {
///     occurs_on: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///     days_until: 3,
/// });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCheck {
    /// The date the next occurrence falls on.
    pub occurs_on: NaiveDate,
    /// Whole days between the reference date and the occurrence (may be 0).
    pub days_until: i64,
}

/// Projects a target's month/day onto the given year.
///
/// Feb 29 resolves to Feb 28 when the candidate year is not a leap year.
/// This is the documented policy for leap-day birthdays; the projection is
/// total for every other month/day.
fn project_onto_year(target: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, target.month(), target.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
    })
}

/// Computes the next occurrence of a target date on or after `today`.
///
/// For a recurring target the month/day is projected onto `today`'s year,
/// or the year after when the projection has already passed. For an
/// absolute deadline the target itself is returned, even when in the past.
pub fn next_occurrence(target: NaiveDate, today: NaiveDate, recurring: bool) -> NaiveDate {
    if !recurring {
        return target;
    }

    let candidate = project_onto_year(target, today.year());
    if candidate < today {
        project_onto_year(target, today.year() + 1)
    } else {
        candidate
    }
}

/// Tests whether the next occurrence of `target` falls within
/// `[today, today + window_days]` inclusive.
///
/// # Arguments
///
/// * `target` - The anniversary or deadline date
/// * `today` - The reference date
/// * `window_days` - The lookahead window size in days
/// * `recurring` - Whether `target` recurs yearly (birthday) or is an
///   absolute one-time deadline
///
/// # Returns
///
/// Returns `Some(WindowCheck)` when the occurrence is inside the window,
/// `None` otherwise. A deadline that has already passed is never a match;
/// a recurring date always resolves to its next occurrence first. Pure
/// function; no side effects.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::evaluation::check_window;
/// use chrono::NaiveDate;
///
/// let deadline = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
///
/// assert_eq!(check_window(deadline, today, 7, false).unwrap().days_until, 5);
/// assert!(check_window(deadline, today, 4, false).is_none());
/// ```
pub fn check_window(
    target: NaiveDate,
    today: NaiveDate,
    window_days: u32,
    recurring: bool,
) -> Option<WindowCheck> {
    let occurs_on = next_occurrence(target, today, recurring);
    let days_until = (occurs_on - today).num_days();

    if days_until >= 0 && days_until <= i64::from(window_days) {
        Some(WindowCheck {
            occurs_on,
            days_until,
        })
    } else {
        None
    }
}
