//! The evaluation pass.
//!
//! Orchestrates the per-kind collectors over one snapshot and one reference
//! date. The pass is deterministic and stateless: identical inputs yield an
//! identical, order-stable event set, and no "already notified" ledger is
//! kept. Deduplication across daily runs belongs to the external scheduler.

use chrono::NaiveDate;

use crate::config::ReminderConfig;
use crate::error::{ReminderError, ReminderResult};
use crate::models::{LeaveTypeBalance, PersonRecord, ReminderEvent};
use crate::snapshot::{LeaveRow, PersonRow, Snapshot};

use super::birthdays::collect_birthday_reminders;
use super::contract::collect_contract_reminders;
use super::leave_balance::collect_leave_balance_reminders;
use super::probation::collect_probation_reminders;

/// The result of evaluating raw snapshot rows.
///
/// Pairs the produced events with the per-record errors for the rows that
/// could not be parsed, so the caller can log the skips.
#[derive(Debug, Clone, Default)]
pub struct EvaluationOutcome {
    /// The reminder events, in deterministic dispatch order.
    pub events: Vec<ReminderEvent>,
    /// The rows skipped because of unparsable data.
    pub skipped: Vec<ReminderError>,
}

/// Evaluates one typed snapshot against a reference date.
///
/// Runs the collectors in kind order: birthdays, probation endings,
/// contract expiries, then quarterly leave balances (the latter only on
/// quarter-start dates). Within each kind events are sorted ascending by
/// days remaining, tie-broken by person identifier.
///
/// # Arguments
///
/// * `persons` - The person snapshot; inactive persons are ignored
/// * `balances` - The leave-balance snapshot, keyed by person inside
/// * `today` - The reference calendar date supplied by the caller
/// * `config` - Window sizes per reminder kind
///
/// # Returns
///
/// Returns the full event set, or fails fast with
/// [`ReminderError::InvalidWindow`] when the configuration is unusable.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::config::ReminderConfig;
/// use hr_reminder_engine::evaluation::evaluate;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
/// let events = evaluate(&[], &[], today, &ReminderConfig::default()).unwrap();
/// assert!(events.is_empty());
/// ```
pub fn evaluate(
    persons: &[PersonRecord],
    balances: &[LeaveTypeBalance],
    today: NaiveDate,
    config: &ReminderConfig,
) -> ReminderResult<Vec<ReminderEvent>> {
    config.validate()?;

    let mut events = collect_birthday_reminders(persons, today, config.birthday_window_days);
    events.extend(collect_probation_reminders(
        persons,
        today,
        config.probation_window_days,
    ));
    events.extend(collect_contract_reminders(
        persons,
        today,
        config.contract_window_days,
    ));
    events.extend(collect_leave_balance_reminders(persons, balances, today));

    Ok(events)
}

/// Evaluates raw snapshot rows against a reference date.
///
/// Parses the rows first, isolating each unusable record as a skip instead
/// of an abort, then evaluates the surviving records with [`evaluate`].
pub fn evaluate_rows(
    person_rows: Vec<PersonRow>,
    leave_rows: Vec<LeaveRow>,
    today: NaiveDate,
    config: &ReminderConfig,
) -> ReminderResult<EvaluationOutcome> {
    let snapshot = Snapshot::from_rows(person_rows, leave_rows);
    let events = evaluate(&snapshot.persons, &snapshot.balances, today, config)?;

    Ok(EvaluationOutcome {
        events,
        skipped: snapshot.skipped,
    })
}
