//! Core data models for the care payments engine.
//!
//! This module contains the work-log, service-type and result models used
//! throughout the engine.

mod payment_result;
mod service_type;
mod work_log;

pub use payment_result::{
    AuditStep, AuditTrace, AuditWarning, ContributionKind, EntryContribution, PaymentBreakdown,
    PaymentSummary, SettlementDirection, WorkerSummary,
};
pub use service_type::{ServiceCategory, ServiceType, classify_entry};
pub use work_log::{PaymentMethod, WorkLogEntry};
