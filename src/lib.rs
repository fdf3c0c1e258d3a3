//! Payment and Commission Engine for a Healthcare Staffing Platform
//!
//! This crate computes what the platform owes each care worker, and what each
//! worker owes the platform, from their unpaid work-log entries. Quick-service
//! visits carry a flat per-entry commission; private care is billed hourly and
//! split by a commission fraction.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
