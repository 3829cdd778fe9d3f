//! Person model and related types.
//!
//! This module defines the PersonRecord struct and PersonStatus enum
//! representing one employee in a snapshot supplied to the evaluator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents the employment status of a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonStatus {
    /// Currently employed; eligible for reminders.
    Active,
    /// No longer employed; excluded from every reminder kind.
    Inactive,
}

/// An immutable snapshot of one person, supplied by the caller for a single
/// evaluation pass.
///
/// Date fields that are not known for every person (`date_of_birth`,
/// `final_confirmation_date`, `contract_end_date`, `email`) are optional;
/// a person missing the date a reminder kind needs is silently skipped for
/// that kind only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Unique identifier for the person.
    pub id: String,
    /// The person's display name.
    pub name: String,
    /// The person's employment status.
    pub status: PersonStatus,
    /// The person's date of birth, if recorded.
    pub date_of_birth: Option<NaiveDate>,
    /// The date the person joined.
    pub date_of_joining: NaiveDate,
    /// The date the person's probation ends, if on probation.
    pub final_confirmation_date: Option<NaiveDate>,
    /// The date the person's contract ends, if on a fixed-term contract.
    pub contract_end_date: Option<NaiveDate>,
    /// The department the person belongs to.
    pub department: String,
    /// The person's designation (job title).
    pub designation: String,
    /// Contact address for person-targeted reminders, if recorded.
    pub email: Option<String>,
}

impl PersonRecord {
    /// Returns true if the person is currently active.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_reminder_engine::models::{PersonRecord, PersonStatus};
    /// use chrono::NaiveDate;
    ///
    /// let person = PersonRecord {
    ///     id: "EMP-0001".to_string(),
    ///     name: "Asha Rao".to_string(),
    ///     status: PersonStatus::Active,
    ///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15),
    ///     date_of_joining: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     final_confirmation_date: None,
    ///     contract_end_date: None,
    ///     department: "Engineering".to_string(),
    ///     designation: "Engineer".to_string(),
    ///     email: None,
    /// };
    /// assert!(person.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == PersonStatus::Active
    }
}
