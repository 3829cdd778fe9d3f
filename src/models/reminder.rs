//! Reminder event models.
//!
//! This module defines the [`ReminderEvent`] produced by an evaluation pass,
//! along with its kind, target audience and payload types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::LeaveBalanceLine;

/// The kind of reminder produced by an evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    /// An upcoming birthday within the configured window.
    Birthday,
    /// A probation period ending within the configured window.
    ProbationEnding,
    /// A fixed-term contract expiring within the configured window.
    ContractExpiry,
    /// The quarterly leave-balance summary for one person.
    QuarterlyLeaveBalance,
}

impl std::fmt::Display for ReminderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderKind::Birthday => write!(f, "Birthday"),
            ReminderKind::ProbationEnding => write!(f, "ProbationEnding"),
            ReminderKind::ContractExpiry => write!(f, "ContractExpiry"),
            ReminderKind::QuarterlyLeaveBalance => write!(f, "QuarterlyLeaveBalance"),
        }
    }
}

/// Who a reminder event should be delivered to.
///
/// Delivery itself is the external notifier's job; the audience only says
/// which channel(s) the event is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    /// The subject person only.
    Person,
    /// The HR role group only.
    HrGroup,
    /// Both the person and the HR role group.
    Both,
}

/// The payload attached to a reminder event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReminderPayload {
    /// An upcoming anniversary or deadline.
    Upcoming {
        /// The date the occurrence falls on.
        occurs_on: NaiveDate,
        /// Whole days between the reference date and the occurrence.
        days_until: i64,
    },
    /// The positive leave balances for one person.
    LeaveBalances {
        /// One line per leave type with a positive balance.
        lines: Vec<LeaveBalanceLine>,
    },
}

/// A single reminder produced by an evaluation pass.
///
/// Events are transient: constructed fresh for each pass, never persisted
/// by this crate, and handed to the external notifier in a deterministic
/// order.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::models::{Audience, ReminderEvent, ReminderKind, ReminderPayload};
/// use chrono::NaiveDate;
///
/// let event = ReminderEvent {
///     kind: ReminderKind::Birthday,
///     person_id: "EMP-0001".to_string(),
///     person_name: "Asha Rao".to_string(),
///     audience: Audience::Both,
///     payload: ReminderPayload::Upcoming {
///         occurs_on: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
///         days_until: 3,
///     },
/// };
/// assert_eq!(event.message(), "Birthday for Asha Rao on 2024-06-10 (3 days)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderEvent {
    /// The reminder kind.
    pub kind: ReminderKind,
    /// The identifier of the subject person.
    pub person_id: String,
    /// The display name of the subject person.
    pub person_name: String,
    /// Who this event should be delivered to.
    pub audience: Audience,
    /// The event payload.
    pub payload: ReminderPayload,
}

impl ReminderEvent {
    /// Renders a human-readable one-line summary of this event.
    pub fn message(&self) -> String {
        match &self.payload {
            ReminderPayload::Upcoming {
                occurs_on,
                days_until,
            } => {
                if *days_until == 0 {
                    format!("{} for {} today", self.kind, self.person_name)
                } else {
                    format!(
                        "{} for {} on {} ({} days)",
                        self.kind, self.person_name, occurs_on, days_until
                    )
                }
            }
            ReminderPayload::LeaveBalances { lines } => {
                let summary: Vec<String> = lines
                    .iter()
                    .map(|line| format!("{}: {}", line.leave_type, line.balance.normalize()))
                    .collect();
                format!(
                    "Leave balances for {}: {}",
                    self.person_name,
                    summary.join(", ")
                )
            }
        }
    }
}
