//! The daily pass driver and its external-collaborator seams.
//!
//! The evaluator never performs I/O itself. The [`SnapshotSource`] trait is
//! implemented by the external persistence collaborator, the [`EventSink`]
//! trait by the external notification collaborator (email, in-app, push).
//! [`run_daily_pass`] ties them together for one reference date; invoking
//! it at most once per calendar day is the external scheduler's job.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::ReminderConfig;
use crate::error::ReminderResult;
use crate::evaluation::{evaluate_rows, is_quarter_start};
use crate::models::ReminderEvent;
use crate::snapshot::{LeaveRow, PersonRow};

/// The snapshot-fetch interface owned by the external persistence
/// collaborator.
pub trait SnapshotSource {
    /// Lists the person rows to evaluate. The source may pre-filter to
    /// active persons; the evaluator filters again either way.
    fn list_active_persons(&self) -> ReminderResult<Vec<PersonRow>>;

    /// Lists the leave-balance rows for one person as of a date.
    fn list_leave_balances(
        &self,
        person_id: &str,
        as_of: NaiveDate,
    ) -> ReminderResult<Vec<LeaveRow>>;
}

/// The event-dispatch interface owned by the external notification
/// collaborator.
pub trait EventSink {
    /// Delivers one reminder event. Retry and timeout policy belong to the
    /// implementation, not to the evaluator.
    fn dispatch(&mut self, event: &ReminderEvent) -> ReminderResult<()>;
}

/// Counters summarizing one daily pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    /// Number of events handed to the sink.
    pub dispatched: usize,
    /// Number of snapshot rows skipped as unparsable.
    pub skipped_records: usize,
}

/// Runs one daily reminder pass for the given reference date.
///
/// Fetches the person snapshot, fetches leave balances only when the
/// quarterly trigger fires (balances are irrelevant on every other day),
/// evaluates, and dispatches each event in order. Rows skipped during
/// parsing are logged with `warn!` and counted, never fatal; configuration
/// errors and source/sink failures abort the pass.
///
/// The pass itself keeps no state between invocations, so running it twice
/// for the same date dispatches the same events twice. Suppressing
/// duplicates is the scheduler's responsibility.
pub fn run_daily_pass<S: SnapshotSource, D: EventSink>(
    source: &S,
    sink: &mut D,
    today: NaiveDate,
    config: &ReminderConfig,
) -> ReminderResult<PassSummary> {
    config.validate()?;
    info!(%today, "Running daily HR reminders");

    let person_rows = source.list_active_persons()?;

    let mut leave_rows = Vec::new();
    if is_quarter_start(today) {
        for row in &person_rows {
            leave_rows.extend(source.list_leave_balances(&row.id, today)?);
        }
    }

    let outcome = evaluate_rows(person_rows, leave_rows, today, config)?;

    for error in &outcome.skipped {
        warn!(%error, "Skipping unusable snapshot record");
    }

    for event in &outcome.events {
        sink.dispatch(event)?;
    }

    let summary = PassSummary {
        dispatched: outcome.events.len(),
        skipped_records: outcome.skipped.len(),
    };
    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped_records,
        "Daily HR reminders completed"
    );
    Ok(summary)
}
