//! Core data models for the HR reminder engine.
//!
//! This module contains all the domain models used throughout the engine.

mod leave;
mod person;
mod reminder;

pub use leave::{LeaveBalanceLine, LeaveTypeBalance};
pub use person::{PersonRecord, PersonStatus};
pub use reminder::{Audience, ReminderEvent, ReminderKind, ReminderPayload};
