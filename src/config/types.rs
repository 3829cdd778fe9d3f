//! Configuration types for the reminder evaluator.
//!
//! The windows say how many days ahead of the reference date an upcoming
//! anniversary or deadline still counts as "upcoming". Window sizes are
//! unsigned; a negative value in a YAML file fails at parse time.

use serde::Deserialize;

use crate::error::{ReminderError, ReminderResult};

/// Default lookahead window for birthday reminders, in days.
pub const DEFAULT_BIRTHDAY_WINDOW: u32 = 7;

/// Default lookahead window for probation-ending reminders, in days.
pub const DEFAULT_PROBATION_WINDOW: u32 = 7;

/// Default lookahead window for contract-expiry reminders, in days.
pub const DEFAULT_CONTRACT_WINDOW: u32 = 30;

/// A recurring date has exactly one next occurrence inside any 366-day
/// span, so birthday windows beyond this are ill-defined.
const MAX_RECURRING_WINDOW: u32 = 365;

fn default_birthday_window() -> u32 {
    DEFAULT_BIRTHDAY_WINDOW
}

fn default_probation_window() -> u32 {
    DEFAULT_PROBATION_WINDOW
}

fn default_contract_window() -> u32 {
    DEFAULT_CONTRACT_WINDOW
}

fn default_hr_roles() -> Vec<String> {
    vec!["HR Manager".to_string()]
}

/// The reminder evaluator configuration.
///
/// All fields have defaults, so an empty YAML mapping is a valid
/// configuration. Call [`ReminderConfig::validate`] before evaluating;
/// the evaluation pass does so itself and fails fast on an invalid window.
///
/// # Example
///
/// ```
/// use hr_reminder_engine::config::ReminderConfig;
///
/// let config = ReminderConfig::default();
/// assert_eq!(config.birthday_window_days, 7);
/// assert_eq!(config.contract_window_days, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Lookahead window for birthday reminders, in days.
    #[serde(default = "default_birthday_window")]
    pub birthday_window_days: u32,
    /// Lookahead window for probation-ending reminders, in days.
    #[serde(default = "default_probation_window")]
    pub probation_window_days: u32,
    /// Lookahead window for contract-expiry reminders, in days.
    #[serde(default = "default_contract_window")]
    pub contract_window_days: u32,
    /// Role names the HR-group audience resolves to. Opaque to the
    /// evaluator; the external notifier maps them to recipients.
    #[serde(default = "default_hr_roles")]
    pub hr_roles: Vec<String>,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
            probation_window_days: DEFAULT_PROBATION_WINDOW,
            contract_window_days: DEFAULT_CONTRACT_WINDOW,
            hr_roles: default_hr_roles(),
        }
    }
}

impl ReminderConfig {
    /// Validates the configured windows.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` for a usable configuration, or
    /// [`ReminderError::InvalidWindow`] if the birthday window exceeds 365
    /// days (recurring dates have one occurrence per 366-day span, so a
    /// larger window is ambiguous).
    pub fn validate(&self) -> ReminderResult<()> {
        if self.birthday_window_days > MAX_RECURRING_WINDOW {
            return Err(ReminderError::InvalidWindow {
                kind: "birthday".to_string(),
                window_days: self.birthday_window_days,
                message: format!("must not exceed {} days", MAX_RECURRING_WINDOW),
            });
        }
        Ok(())
    }
}
