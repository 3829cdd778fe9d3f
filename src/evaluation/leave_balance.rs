//! Quarterly leave-balance reminder collection.
//!
//! On the first day of each quarter every active person receives a summary
//! of their positive leave balances. Persons holding no positive balance
//! produce no event at all, not an empty one.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    Audience, LeaveBalanceLine, LeaveTypeBalance, PersonRecord, ReminderEvent, ReminderKind,
    ReminderPayload,
};

/// Returns true if the reference date is the first day of a quarter
/// (Jan 1, Apr 1, Jul 1 or Oct 1).
///
/// # Example
///
/// ```
/// use hr_reminder_engine::evaluation::is_quarter_start;
/// use chrono::NaiveDate;
///
/// assert!(is_quarter_start(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
/// assert!(!is_quarter_start(NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()));
/// ```
pub fn is_quarter_start(today: NaiveDate) -> bool {
    today.day() == 1 && matches!(today.month(), 1 | 4 | 7 | 10)
}

/// Collects quarterly leave-balance reminders for one reference date.
///
/// Fires only when [`is_quarter_start`] holds; on every other date the
/// result is empty. Each active person gets at most one event carrying one
/// line per leave type with a positive balance whose validity period
/// contains `today`. Lines are sorted by leave type and events by person
/// identifier for reproducible ordering.
pub fn collect_leave_balance_reminders(
    persons: &[PersonRecord],
    balances: &[LeaveTypeBalance],
    today: NaiveDate,
) -> Vec<ReminderEvent> {
    if !is_quarter_start(today) {
        return Vec::new();
    }

    let mut active: Vec<&PersonRecord> = persons.iter().filter(|p| p.is_active()).collect();
    active.sort_by(|a, b| a.id.cmp(&b.id));

    active
        .into_iter()
        .filter_map(|person| {
            let mut lines: Vec<LeaveBalanceLine> = balances
                .iter()
                .filter(|b| b.person_id == person.id)
                .filter(|b| b.overlaps(today, today))
                .filter(|b| b.balance() > Decimal::ZERO)
                .map(|b| LeaveBalanceLine {
                    leave_type: b.leave_type.clone(),
                    balance: b.balance(),
                })
                .collect();

            if lines.is_empty() {
                return None;
            }
            lines.sort_by(|a, b| a.leave_type.cmp(&b.leave_type));

            Some(ReminderEvent {
                kind: ReminderKind::QuarterlyLeaveBalance,
                person_id: person.id.clone(),
                person_name: person.name.clone(),
                audience: Audience::Person,
                payload: ReminderPayload::LeaveBalances { lines },
            })
        })
        .collect()
}
