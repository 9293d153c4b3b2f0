//! Background Tasks Module
//!
//! The periodic maintenance jobs that run alongside the server.
//!
//! # Jobs
//! - Heartbeat: appends an alive line every few minutes
//! - Low stock restock: replenishes products below the threshold
//! - Order reminders: lists orders placed in the last week
//! - CRM report: customer, order and revenue totals

pub mod jobs;
pub mod log;
pub mod runner;

pub use log::JobLog;
pub use runner::{spawn_job, JobSpec};
