//! Payment result models for the care payments engine.
//!
//! This module contains the [`PaymentSummary`] returned by the core calculator
//! and the richer [`PaymentBreakdown`] that adds per-entry contributions and an
//! audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ServiceCategory;
use crate::config::CommissionConfig;

/// Which party owes the other once a summary is netted out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementDirection {
    /// Net is positive: the platform pays the worker.
    PlatformOwesWorker,
    /// Net is negative: the worker pays the platform.
    WorkerOwesPlatform,
    /// Nothing is owed either way.
    Settled,
}

/// The three totals produced for one worker's unpaid entries.
///
/// # Example
///
/// ```
/// use care_payments::models::{PaymentSummary, SettlementDirection};
/// use rust_decimal::Decimal;
///
/// let summary = PaymentSummary::from_totals(Decimal::from(24), Decimal::from(3));
/// assert_eq!(summary.net_amount, Decimal::from(21));
/// assert_eq!(summary.direction(), SettlementDirection::PlatformOwesWorker);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Total the platform owes the worker.
    pub amount_owed_to_worker: Decimal,
    /// Total the worker owes the platform.
    pub amount_owed_by_worker: Decimal,
    /// `amount_owed_to_worker - amount_owed_by_worker`.
    pub net_amount: Decimal,
}

impl PaymentSummary {
    /// A summary with every field zero.
    pub fn empty() -> Self {
        Self::from_totals(Decimal::ZERO, Decimal::ZERO)
    }

    /// Builds a summary from the two accumulators, deriving the net.
    pub fn from_totals(owed_to_worker: Decimal, owed_by_worker: Decimal) -> Self {
        Self {
            amount_owed_to_worker: owed_to_worker,
            amount_owed_by_worker: owed_by_worker,
            net_amount: owed_to_worker - owed_by_worker,
        }
    }

    /// Returns which party owes the other.
    pub fn direction(&self) -> SettlementDirection {
        if self.net_amount > Decimal::ZERO {
            SettlementDirection::PlatformOwesWorker
        } else if self.net_amount < Decimal::ZERO {
            SettlementDirection::WorkerOwesPlatform
        } else {
            SettlementDirection::Settled
        }
    }
}

/// One worker's totals in a multi-worker overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSummary {
    /// The worker the line is for.
    pub worker_id: String,
    /// The worker's totals.
    pub summary: PaymentSummary,
    /// Which party owes the other.
    pub direction: SettlementDirection,
    /// Total hours across the worker's unpaid entries.
    pub unpaid_hours: Decimal,
}

/// How a single entry was treated by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionKind {
    /// Quick-service paid in cash; the worker owes the platform its fee.
    FlatFeeOwedByWorker,
    /// Quick-service paid electronically; the platform owes the worker.
    FlatFeeOwedToWorker,
    /// Hourly private-care share owed to the worker.
    HourlyShareOwedToWorker,
    /// Already settled in an earlier payment run.
    SkippedPaid,
    /// Medical equipment or supply order.
    SkippedMedicalSupply,
    /// Hourly entry without a price to compute from.
    SkippedNoPrice,
    /// No tags, or a negative hours or price value.
    SkippedMalformed,
}

/// One entry's effect on the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryContribution {
    /// The ID of the work-log entry.
    pub entry_id: String,
    /// The entry's category, if it has one.
    pub category: Option<ServiceCategory>,
    /// How the entry was treated.
    pub kind: ContributionKind,
    /// Hours logged on the entry.
    pub hours: Decimal,
    /// The flat fee or hourly share that was applied.
    pub rate: Decimal,
    /// Amount added to `amount_owed_to_worker`.
    pub owed_to_worker: Decimal,
    /// Amount added to `amount_owed_by_worker`.
    pub owed_by_worker: Decimal,
}

impl EntryContribution {
    /// A contribution that leaves both totals untouched.
    pub fn skipped(
        entry_id: &str,
        category: Option<ServiceCategory>,
        kind: ContributionKind,
        hours: Decimal,
    ) -> Self {
        Self {
            entry_id: entry_id.to_string(),
            category,
            kind,
            hours,
            rate: Decimal::ZERO,
            owed_to_worker: Decimal::ZERO,
            owed_by_worker: Decimal::ZERO,
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The work-log entry the rule was applied to.
    pub entry_id: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag entries that were accepted but contributed nothing because
/// they were malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a payment calculation for one worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The worker the calculation is for.
    pub worker_id: String,
    /// The commission regime the calculation used.
    pub commission: CommissionConfig,
    /// The three totals.
    pub summary: PaymentSummary,
    /// Which party owes the other.
    pub direction: SettlementDirection,
    /// Total hours across unpaid entries.
    pub unpaid_hours: Decimal,
    /// Per-entry contributions, in input order.
    pub contributions: Vec<EntryContribution>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
