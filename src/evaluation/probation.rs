//! Probation-ending reminder collection.
//!
//! Matches active persons whose final confirmation date falls within the
//! lookahead window. Probation reminders go to the HR group, which owns
//! the performance review and confirmation process.

use chrono::NaiveDate;

use crate::models::{Audience, PersonRecord, ReminderEvent, ReminderKind, ReminderPayload};

use super::date_window::check_window;

/// Collects probation-ending reminders for one reference date.
///
/// The final confirmation date is an absolute deadline: a date that has
/// already passed never matches. Persons that are inactive or have no
/// final confirmation date are skipped silently. Matches are sorted
/// ascending by `days_until`, tie-broken by person identifier.
pub fn collect_probation_reminders(
    persons: &[PersonRecord],
    today: NaiveDate,
    window_days: u32,
) -> Vec<ReminderEvent> {
    let mut matches: Vec<(i64, &PersonRecord, NaiveDate)> = persons
        .iter()
        .filter(|p| p.is_active())
        .filter_map(|p| {
            let confirmation = p.final_confirmation_date?;
            let check = check_window(confirmation, today, window_days, false)?;
            Some((check.days_until, p, check.occurs_on))
        })
        .collect();

    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));

    matches
        .into_iter()
        .map(|(days_until, person, occurs_on)| ReminderEvent {
            kind: ReminderKind::ProbationEnding,
            person_id: person.id.clone(),
            person_name: person.name.clone(),
            audience: Audience::HrGroup,
            payload: ReminderPayload::Upcoming {
                occurs_on,
                days_until,
            },
        })
        .collect()
}
