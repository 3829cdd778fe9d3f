//! Leave balance models.
//!
//! This module contains the [`LeaveTypeBalance`] type representing one
//! person's allocation of a leave type over a validity period, and the
//! [`LeaveBalanceLine`] summary carried in quarterly reminder events.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One person's balance for a single leave type over a validity period.
///
/// The balance is `allocated - consumed`, clamped at zero unless the leave
/// type explicitly allows negative balances (typically Leave Without Pay).
/// The `allow_negative` flag is passed through from the leave-type
/// configuration, never recomputed here.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::models::LeaveTypeBalance;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let balance = LeaveTypeBalance {
///     leave_type: "Annual Leave".to_string(),
///     person_id: "EMP-0001".to_string(),
///     allocated: Decimal::from(21),
///     consumed: Decimal::from(5),
///     from_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     to_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
///     allow_negative: false,
/// };
/// assert_eq!(balance.balance(), Decimal::from(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTypeBalance {
    /// The leave type identifier (e.g., "Annual Leave").
    pub leave_type: String,
    /// The person this balance belongs to.
    pub person_id: String,
    /// The total number of leave days allocated for the period.
    pub allocated: Decimal,
    /// The number of leave days consumed within the period.
    pub consumed: Decimal,
    /// The start of the validity period (inclusive).
    pub from_date: NaiveDate,
    /// The end of the validity period (inclusive).
    pub to_date: NaiveDate,
    /// Whether this leave type may go negative (e.g., Leave Without Pay).
    pub allow_negative: bool,
}

impl LeaveTypeBalance {
    /// Returns the remaining balance for this leave type.
    ///
    /// Computed as `allocated - consumed`. A negative result is clamped to
    /// zero unless `allow_negative` is set.
    pub fn balance(&self) -> Decimal {
        let raw = self.allocated - self.consumed;
        if raw < Decimal::ZERO && !self.allow_negative {
            Decimal::ZERO
        } else {
            raw
        }
    }

    /// Returns true if the validity period overlaps `[from, to]` inclusive.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.from_date <= to && self.to_date >= from
    }
}

/// A single leave-type line in a quarterly balance reminder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalanceLine {
    /// The leave type identifier.
    pub leave_type: String,
    /// The remaining balance for this leave type.
    pub balance: Decimal,
}
