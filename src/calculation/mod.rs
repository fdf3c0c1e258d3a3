//! Calculation logic for the care payments engine.
//!
//! This module contains the quick-service flat fee, the private-care hourly
//! share, the per-worker aggregation that combines them, and the unpaid
//! working-hours total.

mod private_care;
mod quick_service;
mod worker_hours;
mod worker_payments;

pub use private_care::{PRIVATE_CARE_RULE_ID, PrivateCareShareResult, private_care_share};
pub use quick_service::{QUICK_SERVICE_RULE_ID, QuickServiceFeeResult, quick_service_fee};
pub use worker_hours::total_unpaid_hours;
pub use worker_payments::{
    EntryEvaluation, SCREENING_RULE_ID, compute_payment_breakdown, compute_worker_payments,
    entry_contribution, evaluate_entry, summarize_by_worker,
};
