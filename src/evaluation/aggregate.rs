//! Grouping and summation helpers over snapshot lists.
//!
//! These back both the dashboard-style aggregates (headcounts, leave usage,
//! joiners this month) and the evaluator's leave-balance computations.
//! All functions are pure; `BTreeMap` keeps iteration order deterministic.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{LeaveTypeBalance, PersonRecord};

/// Returns the first day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Returns the last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of next month exists")
        - chrono::Duration::days(1)
}

/// Counts active persons per department.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::evaluation::headcount_by_department;
/// use hr_reminder_engine::models::{PersonRecord, PersonStatus};
/// use chrono::NaiveDate;
///
/// let person = PersonRecord {
///     id: "EMP-0001".to_string(),
///     name: "Asha Rao".to_string(),
///     status: PersonStatus::Active,
///     date_of_birth: None,
///     date_of_joining: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     final_confirmation_date: None,
///     contract_end_date: None,
///     department: "Engineering".to_string(),
///     designation: "Engineer".to_string(),
///     email: None,
/// };
///
/// let counts = headcount_by_department(&[person]);
/// assert_eq!(counts["Engineering"], 1);
/// ```
pub fn headcount_by_department(persons: &[PersonRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for person in persons.iter().filter(|p| p.is_active()) {
        *counts.entry(person.department.clone()).or_insert(0) += 1;
    }
    counts
}

/// Sums consumed leave days per leave type within a date window.
///
/// An entry contributes when its validity period overlaps `[from, to]`
/// inclusive. Leave types with no overlapping entries are absent from the
/// result rather than reported as zero.
pub fn leave_days_by_type(
    balances: &[LeaveTypeBalance],
    from: NaiveDate,
    to: NaiveDate,
) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for balance in balances.iter().filter(|b| b.overlaps(from, to)) {
        *totals
            .entry(balance.leave_type.clone())
            .or_insert(Decimal::ZERO) += balance.consumed;
    }
    totals
}

/// Returns the active persons who joined in the month containing
/// `reference`, newest joiners first.
///
/// Ties on joining date break by person identifier for a stable order.
pub fn joiners_in_month(persons: &[PersonRecord], reference: NaiveDate) -> Vec<&PersonRecord> {
    let first = first_day_of_month(reference);
    let last = last_day_of_month(reference);

    let mut joiners: Vec<&PersonRecord> = persons
        .iter()
        .filter(|p| p.is_active())
        .filter(|p| p.date_of_joining >= first && p.date_of_joining <= last)
        .collect();

    joiners.sort_by(|a, b| {
        b.date_of_joining
            .cmp(&a.date_of_joining)
            .then_with(|| a.id.cmp(&b.id))
    });
    joiners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonStatus;
    use std::str::FromStr;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn person(id: &str, department: &str, joined: NaiveDate, status: PersonStatus) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            name: format!("Person {}", id),
            status,
            date_of_birth: None,
            date_of_joining: joined,
            final_confirmation_date: None,
            contract_end_date: None,
            department: department.to_string(),
            designation: "Staff".to_string(),
            email: None,
        }
    }

    fn usage(leave_type: &str, consumed: &str, from: NaiveDate, to: NaiveDate) -> LeaveTypeBalance {
        LeaveTypeBalance {
            leave_type: leave_type.to_string(),
            person_id: "EMP-0001".to_string(),
            allocated: dec("21"),
            consumed: dec(consumed),
            from_date: from,
            to_date: to,
            allow_negative: false,
        }
    }

    #[test]
    fn test_first_day_of_month() {
        assert_eq!(first_day_of_month(date(2024, 6, 17)), date(2024, 6, 1));
        assert_eq!(first_day_of_month(date(2024, 6, 1)), date(2024, 6, 1));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(date(2024, 6, 17)), date(2024, 6, 30));
        assert_eq!(last_day_of_month(date(2024, 12, 5)), date(2024, 12, 31));
        // Leap February
        assert_eq!(last_day_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(last_day_of_month(date(2025, 2, 10)), date(2025, 2, 28));
    }

    #[test]
    fn test_headcount_counts_active_only() {
        let persons = vec![
            person("EMP-0001", "Engineering", date(2022, 1, 1), PersonStatus::Active),
            person("EMP-0002", "Engineering", date(2022, 1, 1), PersonStatus::Active),
            person("EMP-0003", "Operations", date(2022, 1, 1), PersonStatus::Active),
            person("EMP-0004", "Engineering", date(2022, 1, 1), PersonStatus::Inactive),
        ];

        let counts = headcount_by_department(&persons);
        assert_eq!(counts["Engineering"], 2);
        assert_eq!(counts["Operations"], 1);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_headcount_empty_for_no_persons() {
        assert!(headcount_by_department(&[]).is_empty());
    }

    #[test]
    fn test_leave_days_sums_overlapping_entries() {
        let balances = vec![
            usage("Annual Leave", "5", date(2024, 1, 1), date(2024, 12, 31)),
            usage("Annual Leave", "2.5", date(2024, 6, 1), date(2024, 6, 30)),
            usage("Sick Leave", "1", date(2024, 1, 1), date(2024, 12, 31)),
        ];

        let totals = leave_days_by_type(&balances, date(2024, 6, 1), date(2024, 6, 30));
        assert_eq!(totals["Annual Leave"], dec("7.5"));
        assert_eq!(totals["Sick Leave"], dec("1"));
    }

    #[test]
    fn test_leave_days_excludes_disjoint_entries() {
        let balances = vec![
            usage("Annual Leave", "5", date(2023, 1, 1), date(2023, 12, 31)),
        ];

        let totals = leave_days_by_type(&balances, date(2024, 6, 1), date(2024, 6, 30));
        assert!(totals.is_empty());
    }

    #[test]
    fn test_joiners_in_month_filters_and_orders() {
        let persons = vec![
            person("EMP-0001", "Engineering", date(2024, 6, 3), PersonStatus::Active),
            person("EMP-0002", "Engineering", date(2024, 6, 24), PersonStatus::Active),
            person("EMP-0003", "Operations", date(2024, 5, 31), PersonStatus::Active),
            person("EMP-0004", "Operations", date(2024, 6, 10), PersonStatus::Inactive),
        ];

        let joiners = joiners_in_month(&persons, date(2024, 6, 15));
        let ids: Vec<&str> = joiners.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP-0002", "EMP-0001"]);
    }

    #[test]
    fn test_joiners_on_month_boundaries_included() {
        let persons = vec![
            person("EMP-0001", "Engineering", date(2024, 6, 1), PersonStatus::Active),
            person("EMP-0002", "Engineering", date(2024, 6, 30), PersonStatus::Active),
        ];

        let joiners = joiners_in_month(&persons, date(2024, 6, 15));
        assert_eq!(joiners.len(), 2);
    }
}
