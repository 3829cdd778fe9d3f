//! Recurring HR event evaluator.
//!
//! This crate evaluates an immutable snapshot of employee and leave-balance
//! records against a reference date and produces the set of reminder events
//! (upcoming birthdays, probation periods ending, contracts expiring,
//! quarterly leave-balance summaries) for an external notifier to dispatch.
//! The evaluator is pure and stateless; persistence, scheduling and delivery
//! belong to the caller behind the traits in [`runner`].

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod runner;
pub mod snapshot;
