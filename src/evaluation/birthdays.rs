//! Birthday reminder collection.
//!
//! Matches active persons whose next birthday falls within the lookahead
//! window. Birthdays address both the person and the HR group, since the
//! person receives wishes and HR arranges any benefits.

use chrono::NaiveDate;

use crate::models::{Audience, PersonRecord, ReminderEvent, ReminderKind, ReminderPayload};

use super::date_window::check_window;

/// Collects birthday reminders for one reference date.
///
/// Persons that are inactive or have no recorded date of birth are skipped
/// silently. Matches are sorted ascending by `days_until`, tie-broken by
/// person identifier, so downstream notification order is reproducible.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::evaluation::collect_birthday_reminders;
/// use hr_reminder_engine::models::{PersonRecord, PersonStatus, ReminderKind};
/// use chrono::NaiveDate;
///
/// let person = PersonRecord {
///     id: "EMP-0001".to_string(),
///     name: "Asha Rao".to_string(),
///     status: PersonStatus::Active,
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 10),
///     date_of_joining: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     final_confirmation_date: None,
///     contract_end_date: None,
///     department: "Engineering".to_string(),
///     designation: "Engineer".to_string(),
///     email: None,
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let events = collect_birthday_reminders(&[person], today, 7);
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].kind, ReminderKind::Birthday);
/// ```
pub fn collect_birthday_reminders(
    persons: &[PersonRecord],
    today: NaiveDate,
    window_days: u32,
) -> Vec<ReminderEvent> {
    let mut matches: Vec<(i64, &PersonRecord, NaiveDate)> = persons
        .iter()
        .filter(|p| p.is_active())
        .filter_map(|p| {
            let born = p.date_of_birth?;
            let check = check_window(born, today, window_days, true)?;
            Some((check.days_until, p, check.occurs_on))
        })
        .collect();

    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));

    matches
        .into_iter()
        .map(|(days_until, person, occurs_on)| ReminderEvent {
            kind: ReminderKind::Birthday,
            person_id: person.id.clone(),
            person_name: person.name.clone(),
            audience: Audience::Both,
            payload: ReminderPayload::Upcoming {
                occurs_on,
                days_until,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn person(id: &str, born: Option<NaiveDate>, status: PersonStatus) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            name: format!("Person {}", id),
            status,
            date_of_birth: born,
            date_of_joining: date(2020, 1, 1),
            final_confirmation_date: None,
            contract_end_date: None,
            department: "Engineering".to_string(),
            designation: "Engineer".to_string(),
            email: None,
        }
    }

    #[test]
    fn test_birthday_within_window_matched() {
        let persons = vec![person(
            "EMP-0001",
            Some(date(1990, 6, 10)),
            PersonStatus::Active,
        )];
        let events = collect_birthday_reminders(&persons, date(2024, 6, 7), 7);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].audience, Audience::Both);
        assert_eq!(
            events[0].payload,
            ReminderPayload::Upcoming {
                occurs_on: date(2024, 6, 10),
                days_until: 3,
            }
        );
    }

    #[test]
    fn test_birthday_outside_window_not_matched() {
        let persons = vec![person(
            "EMP-0001",
            Some(date(1990, 6, 20)),
            PersonStatus::Active,
        )];
        assert!(collect_birthday_reminders(&persons, date(2024, 6, 7), 7).is_empty());
    }

    #[test]
    fn test_inactive_person_skipped() {
        let persons = vec![person(
            "EMP-0001",
            Some(date(1990, 6, 10)),
            PersonStatus::Inactive,
        )];
        assert!(collect_birthday_reminders(&persons, date(2024, 6, 7), 7).is_empty());
    }

    #[test]
    fn test_person_without_birth_date_skipped_silently() {
        let persons = vec![person("EMP-0001", None, PersonStatus::Active)];
        assert!(collect_birthday_reminders(&persons, date(2024, 6, 7), 7).is_empty());
    }

    #[test]
    fn test_matches_sorted_by_days_until_then_id() {
        let persons = vec![
            person("EMP-0003", Some(date(1988, 6, 9)), PersonStatus::Active),
            person("EMP-0002", Some(date(1991, 6, 12)), PersonStatus::Active),
            person("EMP-0001", Some(date(1990, 6, 9)), PersonStatus::Active),
        ];
        let events = collect_birthday_reminders(&persons, date(2024, 6, 7), 7);

        let order: Vec<&str> = events.iter().map(|e| e.person_id.as_str()).collect();
        assert_eq!(order, vec!["EMP-0001", "EMP-0003", "EMP-0002"]);
    }

    #[test]
    fn test_birth_year_is_ignored() {
        // Two persons born the same month/day in different years match alike
        let persons = vec![
            person("EMP-0001", Some(date(1965, 6, 10)), PersonStatus::Active),
            person("EMP-0002", Some(date(2001, 6, 10)), PersonStatus::Active),
        ];
        let events = collect_birthday_reminders(&persons, date(2024, 6, 7), 7);
        assert_eq!(events.len(), 2);
    }
}
