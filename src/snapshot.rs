//! Raw snapshot rows and fallible parsing into typed records.
//!
//! The external persistence collaborator hands back loosely-typed rows in
//! which every date is a string. This module converts those rows into the
//! typed models, reporting an [`ReminderError::InvalidRecord`] for each row
//! whose dates fail to parse while the rest of the snapshot stays usable.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ReminderError, ReminderResult};
use crate::models::{LeaveTypeBalance, PersonRecord, PersonStatus};

/// The date format used by snapshot exports.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A raw person row as exported by the external persistence collaborator.
///
/// All dates are strings in `YYYY-MM-DD` format; optional fields may be
/// absent or null. Convert with [`PersonRow::into_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRow {
    /// Unique identifier for the person.
    pub id: String,
    /// The person's display name.
    pub name: String,
    /// The person's employment status.
    pub status: PersonStatus,
    /// The person's date of birth, if recorded.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// The date the person joined.
    pub date_of_joining: String,
    /// The date the person's probation ends, if on probation.
    #[serde(default)]
    pub final_confirmation_date: Option<String>,
    /// The date the person's contract ends, if on a fixed-term contract.
    #[serde(default)]
    pub contract_end_date: Option<String>,
    /// The department the person belongs to.
    pub department: String,
    /// The person's designation (job title).
    pub designation: String,
    /// Contact address, if recorded.
    #[serde(default)]
    pub email: Option<String>,
}

/// A raw leave-balance row as exported by the external persistence
/// collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRow {
    /// The leave type identifier.
    pub leave_type: String,
    /// The person this balance belongs to.
    pub person_id: String,
    /// Total leave days allocated for the period.
    pub allocated: Decimal,
    /// Leave days consumed within the period.
    pub consumed: Decimal,
    /// Start of the validity period, `YYYY-MM-DD`.
    pub from_date: String,
    /// End of the validity period, `YYYY-MM-DD`.
    pub to_date: String,
    /// Whether this leave type may go negative.
    #[serde(default)]
    pub allow_negative: bool,
}

fn parse_date(record_id: &str, field: &str, value: &str) -> ReminderResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ReminderError::InvalidRecord {
        record_id: record_id.to_string(),
        field: field.to_string(),
        message: format!("unparsable date '{}'", value),
    })
}

fn parse_optional_date(
    record_id: &str,
    field: &str,
    value: Option<&String>,
) -> ReminderResult<Option<NaiveDate>> {
    match value {
        Some(raw) => parse_date(record_id, field, raw).map(Some),
        None => Ok(None),
    }
}

impl PersonRow {
    /// Parses this row into a typed [`PersonRecord`].
    ///
    /// A missing optional date stays `None`; a present but unparsable date
    /// yields [`ReminderError::InvalidRecord`] naming the offending field.
    pub fn into_record(self) -> ReminderResult<PersonRecord> {
        let date_of_birth =
            parse_optional_date(&self.id, "date_of_birth", self.date_of_birth.as_ref())?;
        let date_of_joining = parse_date(&self.id, "date_of_joining", &self.date_of_joining)?;
        let final_confirmation_date = parse_optional_date(
            &self.id,
            "final_confirmation_date",
            self.final_confirmation_date.as_ref(),
        )?;
        let contract_end_date =
            parse_optional_date(&self.id, "contract_end_date", self.contract_end_date.as_ref())?;

        Ok(PersonRecord {
            id: self.id,
            name: self.name,
            status: self.status,
            date_of_birth,
            date_of_joining,
            final_confirmation_date,
            contract_end_date,
            department: self.department,
            designation: self.designation,
            email: self.email,
        })
    }
}

impl LeaveRow {
    /// Parses this row into a typed [`LeaveTypeBalance`].
    pub fn into_balance(self) -> ReminderResult<LeaveTypeBalance> {
        let record_id = format!("{}/{}", self.person_id, self.leave_type);
        let from_date = parse_date(&record_id, "from_date", &self.from_date)?;
        let to_date = parse_date(&record_id, "to_date", &self.to_date)?;

        Ok(LeaveTypeBalance {
            leave_type: self.leave_type,
            person_id: self.person_id,
            allocated: self.allocated,
            consumed: self.consumed,
            from_date,
            to_date,
            allow_negative: self.allow_negative,
        })
    }
}

/// A typed snapshot ready for evaluation, plus the rows that were skipped.
///
/// Built with [`Snapshot::from_rows`]. `skipped` holds one
/// [`ReminderError::InvalidRecord`] per unusable row; the caller is
/// expected to log them.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Persons that parsed successfully.
    pub persons: Vec<PersonRecord>,
    /// Leave balances that parsed successfully.
    pub balances: Vec<LeaveTypeBalance>,
    /// Per-row errors for the rows that did not parse.
    pub skipped: Vec<ReminderError>,
}

impl Snapshot {
    /// Converts raw export rows into a typed snapshot.
    ///
    /// Rows with unparsable dates land in `skipped` instead of aborting the
    /// conversion; one bad record must not block reminders for the rest of
    /// the population.
    pub fn from_rows(person_rows: Vec<PersonRow>, leave_rows: Vec<LeaveRow>) -> Self {
        let mut snapshot = Snapshot::default();

        for row in person_rows {
            match row.into_record() {
                Ok(record) => snapshot.persons.push(record),
                Err(error) => snapshot.skipped.push(error),
            }
        }

        for row in leave_rows {
            match row.into_balance() {
                Ok(balance) => snapshot.balances.push(balance),
                Err(error) => snapshot.skipped.push(error),
            }
        }

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_row(id: &str, date_of_birth: Option<&str>) -> PersonRow {
        PersonRow {
            id: id.to_string(),
            name: "Asha Rao".to_string(),
            status: PersonStatus::Active,
            date_of_birth: date_of_birth.map(str::to_string),
            date_of_joining: "2023-06-01".to_string(),
            final_confirmation_date: None,
            contract_end_date: None,
            department: "Engineering".to_string(),
            designation: "Engineer".to_string(),
            email: None,
        }
    }

    fn leave_row(person_id: &str, from: &str, to: &str) -> LeaveRow {
        LeaveRow {
            leave_type: "Annual Leave".to_string(),
            person_id: person_id.to_string(),
            allocated: Decimal::from(21),
            consumed: Decimal::from(5),
            from_date: from.to_string(),
            to_date: to.to_string(),
            allow_negative: false,
        }
    }

    #[test]
    fn test_person_row_parses_all_dates() {
        let mut row = person_row("EMP-0001", Some("1990-01-15"));
        row.final_confirmation_date = Some("2023-12-01".to_string());
        row.contract_end_date = Some("2025-05-31".to_string());

        let record = row.into_record().unwrap();
        assert_eq!(record.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 15));
        assert_eq!(
            record.final_confirmation_date,
            NaiveDate::from_ymd_opt(2023, 12, 1)
        );
        assert_eq!(
            record.contract_end_date,
            NaiveDate::from_ymd_opt(2025, 5, 31)
        );
    }

    #[test]
    fn test_person_row_missing_optional_dates_stay_none() {
        let record = person_row("EMP-0001", None).into_record().unwrap();
        assert!(record.date_of_birth.is_none());
        assert!(record.final_confirmation_date.is_none());
        assert!(record.contract_end_date.is_none());
    }

    #[test]
    fn test_person_row_unparsable_date_names_field() {
        let row = person_row("EMP-0042", Some("1990-13-01"));

        match row.into_record() {
            Err(ReminderError::InvalidRecord {
                record_id, field, ..
            }) => {
                assert_eq!(record_id, "EMP-0042");
                assert_eq!(field, "date_of_birth");
            }
            other => panic!("Expected InvalidRecord error, got {:?}", other),
        }
    }

    #[test]
    fn test_leave_row_parses() {
        let balance = leave_row("EMP-0001", "2024-01-01", "2024-12-31")
            .into_balance()
            .unwrap();
        assert_eq!(balance.from_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(balance.balance(), Decimal::from(16));
    }

    #[test]
    fn test_snapshot_isolates_bad_rows() {
        let persons = vec![
            person_row("EMP-0001", Some("1990-01-15")),
            person_row("EMP-0002", Some("not-a-date")),
            person_row("EMP-0003", None),
        ];
        let balances = vec![
            leave_row("EMP-0001", "2024-01-01", "2024-12-31"),
            leave_row("EMP-0003", "2024-01-01", "bogus"),
        ];

        let snapshot = Snapshot::from_rows(persons, balances);
        assert_eq!(snapshot.persons.len(), 2);
        assert_eq!(snapshot.balances.len(), 1);
        assert_eq!(snapshot.skipped.len(), 2);
    }

    #[test]
    fn test_person_row_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "EMP-0001",
            "name": "Asha Rao",
            "status": "active",
            "date_of_joining": "2023-06-01",
            "department": "Engineering",
            "designation": "Engineer"
        }"#;

        let row: PersonRow = serde_json::from_str(json).unwrap();
        assert!(row.date_of_birth.is_none());
        assert!(row.email.is_none());
    }
}
