//! The date-window reminder evaluator.
//!
//! This module contains the pure computation at the core of the crate:
//! the date-window membership test, the per-kind reminder collectors
//! (birthdays, probation endings, contract expiries, quarterly leave
//! balances), the evaluation pass that orchestrates them, and the
//! grouping helpers shared with dashboard-style aggregates.

mod aggregate;
mod birthdays;
mod contract;
mod date_window;
mod leave_balance;
mod pass;
mod probation;

pub use aggregate::{
    first_day_of_month, headcount_by_department, joiners_in_month, last_day_of_month,
    leave_days_by_type,
};
pub use birthdays::collect_birthday_reminders;
pub use contract::collect_contract_reminders;
pub use date_window::{WindowCheck, check_window, next_occurrence};
pub use leave_balance::{collect_leave_balance_reminders, is_quarter_start};
pub use pass::{EvaluationOutcome, evaluate, evaluate_rows};
pub use probation::collect_probation_reminders;
