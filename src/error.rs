//! Error types for the HR reminder engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors split into two families: configuration errors, which are fatal to
//! a whole evaluation pass, and per-record data errors, which are collected
//! and reported without aborting the pass.

use thiserror::Error;

/// The main error type for the HR reminder engine.
///
/// Configuration variants ([`ReminderError::ConfigNotFound`],
/// [`ReminderError::ConfigParseError`], [`ReminderError::InvalidWindow`])
/// fail an evaluation pass fast. [`ReminderError::InvalidRecord`] is
/// reported per record and never blocks reminders for the rest of the
/// population.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::error::ReminderError;
///
/// let error = ReminderError::ConfigNotFound {
///     path: "/missing/reminders.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/reminders.yaml");
/// ```
#[derive(Debug, Clone, Error)]
pub enum ReminderError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A reminder window size is invalid for its reminder kind.
    #[error("Invalid {kind} window of {window_days} days: {message}")]
    InvalidWindow {
        /// The reminder kind the window applies to.
        kind: String,
        /// The rejected window size.
        window_days: u32,
        /// A description of why the window is invalid.
        message: String,
    },

    /// A snapshot record contained a field that could not be used.
    ///
    /// Raised when a date string in a raw snapshot row fails to parse.
    /// The record is skipped; the pass continues for everyone else.
    #[error("Invalid record '{record_id}', field '{field}': {message}")]
    InvalidRecord {
        /// The identifier of the record that was skipped.
        record_id: String,
        /// The field that was unusable.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return ReminderError.
pub type ReminderResult<T> = Result<T, ReminderError>;
