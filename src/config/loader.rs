//! Configuration loading functionality.
//!
//! This module reads a [`ReminderConfig`] from a YAML file and validates it.

use std::fs;
use std::path::Path;

use crate::error::{ReminderError, ReminderResult};

use super::types::ReminderConfig;

/// Loads and validates a reminder configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g., "./config/reminders.yaml")
///
/// # Returns
///
/// Returns the validated [`ReminderConfig`], or an error if:
/// - The file is missing ([`ReminderError::ConfigNotFound`])
/// - The file contains invalid YAML ([`ReminderError::ConfigParseError`])
/// - A window size fails validation ([`ReminderError::InvalidWindow`])
///
/// # Example
///
/// ```no_run
/// use hr_reminder_engine::config::load_config;
///
/// let config = load_config("./config/reminders.yaml")?;
/// println!("Birthday window: {} days", config.birthday_window_days);
/// # Ok::<(), hr_reminder_engine::error::ReminderError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> ReminderResult<ReminderConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| ReminderError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let config: ReminderConfig =
        serde_yaml::from_str(&content).map_err(|e| ReminderError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    config.validate()?;
    Ok(config)
}
