//! Reminder configuration.
//!
//! This module provides the [`ReminderConfig`] type describing the lookahead
//! window per reminder kind, and a loader for reading it from a YAML file.

mod loader;
mod types;

pub use loader::load_config;
pub use types::{
    DEFAULT_BIRTHDAY_WINDOW, DEFAULT_CONTRACT_WINDOW, DEFAULT_PROBATION_WINDOW, ReminderConfig,
};
