//! Worker payment aggregation.
//!
//! This module ties the per-entry rules together. Each unpaid entry is
//! screened, classified and routed to either the quick-service flat fee or
//! the private-care hourly share, and the contributions are summed into a
//! [`PaymentSummary`].

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::CommissionConfig;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, ContributionKind, EntryContribution, PaymentBreakdown,
    PaymentSummary, ServiceCategory, WorkLogEntry, WorkerSummary,
};

use super::private_care::{private_care_contribution, private_care_share};
use super::quick_service::{quick_service_contribution, quick_service_fee};
use super::worker_hours::{sum_unpaid_hours, total_unpaid_hours};

/// Rule identifier for entries rejected before any payment rule applies.
pub const SCREENING_RULE_ID: &str = "entry_screening";

/// One entry's contribution together with its audit record.
#[derive(Debug, Clone)]
pub struct EntryEvaluation {
    /// The entry's effect on the totals.
    pub contribution: EntryContribution,
    /// The audit step recording the decision.
    pub audit_step: AuditStep,
    /// Set when the entry was malformed and contributed nothing.
    pub warning: Option<AuditWarning>,
}

/// Why an entry was turned away before reaching a payment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Paid,
    MedicalSupply,
    Untagged,
    NegativeHours,
}

impl Rejection {
    fn kind(self) -> ContributionKind {
        match self {
            Rejection::Paid => ContributionKind::SkippedPaid,
            Rejection::MedicalSupply => ContributionKind::SkippedMedicalSupply,
            Rejection::Untagged | Rejection::NegativeHours => ContributionKind::SkippedMalformed,
        }
    }

    fn reasoning(self) -> &'static str {
        match self {
            Rejection::Paid => "Entry already settled in an earlier payment run",
            Rejection::MedicalSupply => {
                "Medical equipment and supply orders are not billable labour"
            }
            Rejection::Untagged => "Entry has no service types, contributes nothing",
            Rejection::NegativeHours => "Entry has negative hours, contributes nothing",
        }
    }

    /// Set for rejections that mean the entry itself is malformed.
    fn problem(self) -> Option<&'static str> {
        match self {
            Rejection::Untagged => Some("has no service types"),
            Rejection::NegativeHours => Some("has negative hours"),
            Rejection::Paid | Rejection::MedicalSupply => None,
        }
    }
}

fn screen(entry: &WorkLogEntry) -> Option<Rejection> {
    if entry.is_paid {
        return Some(Rejection::Paid);
    }
    match entry.category() {
        None => Some(Rejection::Untagged),
        Some(ServiceCategory::MedicalSupply) => Some(Rejection::MedicalSupply),
        Some(_) if entry.hours_or_zero() < Decimal::ZERO => Some(Rejection::NegativeHours),
        Some(_) => None,
    }
}

/// Computes a single entry's effect on the totals, without an audit record.
///
/// Applies the same rules as [`evaluate_entry`].
pub fn entry_contribution(entry: &WorkLogEntry, config: &CommissionConfig) -> EntryContribution {
    if let Some(rejection) = screen(entry) {
        return EntryContribution::skipped(
            &entry.id,
            entry.category(),
            rejection.kind(),
            entry.hours_or_zero(),
        );
    }
    match entry.category() {
        Some(ServiceCategory::QuickService) => quick_service_contribution(entry, config),
        _ => private_care_contribution(entry, config),
    }
}

/// Evaluates a single entry against the commission regime.
///
/// Paid entries, medical-supply entries, untagged entries and entries with
/// negative hours contribute nothing. Quick-service entries get the flat fee;
/// every other category is billed on its hourly price.
pub fn evaluate_entry(
    entry: &WorkLogEntry,
    config: &CommissionConfig,
    step_number: u32,
) -> EntryEvaluation {
    if let Some(rejection) = screen(entry) {
        let warning = rejection.problem().map(|problem| {
            debug!(entry_id = %entry.id, problem, "Skipping malformed entry");
            malformed_warning(entry, problem)
        });
        return EntryEvaluation {
            contribution: EntryContribution::skipped(
                &entry.id,
                entry.category(),
                rejection.kind(),
                entry.hours_or_zero(),
            ),
            audit_step: screening_step(entry, rejection, step_number),
            warning,
        };
    }

    match entry.category() {
        Some(ServiceCategory::QuickService) => {
            let result = quick_service_fee(entry, config, step_number);
            EntryEvaluation {
                contribution: result.contribution,
                audit_step: result.audit_step,
                warning: None,
            }
        }
        _ => {
            let result = private_care_share(entry, config, step_number);
            let warning = (result.contribution.kind == ContributionKind::SkippedMalformed)
                .then(|| {
                    let problem = if entry.price_or_zero() < Decimal::ZERO {
                        "has a negative price"
                    } else {
                        "has an hourly amount too large to represent"
                    };
                    debug!(entry_id = %entry.id, problem, "Skipping malformed entry");
                    malformed_warning(entry, problem)
                });
            EntryEvaluation {
                contribution: result.contribution,
                audit_step: result.audit_step,
                warning,
            }
        }
    }
}

fn screening_step(entry: &WorkLogEntry, rejection: Rejection, step_number: u32) -> AuditStep {
    let service_types: Vec<&str> = entry.service_types.iter().map(|t| t.as_str()).collect();

    AuditStep {
        step_number,
        rule_id: SCREENING_RULE_ID.to_string(),
        rule_name: "Entry Screening".to_string(),
        entry_id: entry.id.clone(),
        input: serde_json::json!({
            "is_paid": entry.is_paid,
            "service_types": service_types,
            "category": entry.category().map(|c| c.as_str())
        }),
        output: serde_json::json!({ "included": false }),
        reasoning: rejection.reasoning().to_string(),
    }
}

fn malformed_warning(entry: &WorkLogEntry, problem: &str) -> AuditWarning {
    AuditWarning {
        code: "MALFORMED_ENTRY".to_string(),
        message: format!("Work log entry '{}' {}", entry.id, problem),
        severity: "low".to_string(),
    }
}

/// Adds a contribution to the running totals, saturating at `Decimal::MAX`.
fn accumulate(
    (to, by): (Decimal, Decimal),
    contribution: &EntryContribution,
) -> (Decimal, Decimal) {
    (
        to.saturating_add(contribution.owed_to_worker),
        by.saturating_add(contribution.owed_by_worker),
    )
}

fn sum_entries<'a, I>(entries: I, config: &CommissionConfig) -> PaymentSummary
where
    I: IntoIterator<Item = &'a WorkLogEntry>,
{
    let (owed_to, owed_by) = entries
        .into_iter()
        .map(|entry| entry_contribution(entry, config))
        .fold((Decimal::ZERO, Decimal::ZERO), |totals, c| accumulate(totals, &c));

    PaymentSummary::from_totals(owed_to, owed_by)
}

/// Computes what the platform owes a worker and what the worker owes the platform.
///
/// Entries are read, never modified, and the result does not depend on their
/// order. Paid entries are ignored even if the caller did not filter them.
/// Totals saturate at `Decimal::MAX` instead of overflowing.
///
/// # Examples
///
/// ```
/// use care_payments::calculation::compute_worker_payments;
/// use care_payments::config::CommissionConfig;
///
/// let summary = compute_worker_payments(&[], &CommissionConfig::default());
/// assert!(summary.net_amount.is_zero());
/// ```
pub fn compute_worker_payments(
    entries: &[WorkLogEntry],
    config: &CommissionConfig,
) -> PaymentSummary {
    sum_entries(entries, config)
}

/// Computes a worker's payments with per-entry contributions and an audit trace.
///
/// Contributions and audit steps follow input order, numbered from 1.
pub fn compute_payment_breakdown(
    worker_id: &str,
    entries: &[WorkLogEntry],
    config: &CommissionConfig,
) -> PaymentBreakdown {
    let start_time = Instant::now();

    let mut contributions = Vec::with_capacity(entries.len());
    let mut steps = Vec::with_capacity(entries.len());
    let mut warnings = Vec::new();
    let mut totals = (Decimal::ZERO, Decimal::ZERO);

    for (step_number, entry) in (1u32..).zip(entries) {
        let evaluation = evaluate_entry(entry, config, step_number);
        totals = accumulate(totals, &evaluation.contribution);
        contributions.push(evaluation.contribution);
        steps.push(evaluation.audit_step);
        warnings.extend(evaluation.warning);
    }

    let summary = PaymentSummary::from_totals(totals.0, totals.1);
    let duration_us = start_time.elapsed().as_micros() as u64;

    PaymentBreakdown {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        worker_id: worker_id.to_string(),
        commission: config.clone(),
        direction: summary.direction(),
        summary,
        unpaid_hours: total_unpaid_hours(entries),
        contributions,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

/// Groups entries by worker and computes each worker's summary.
///
/// Used for the administrator overview where entries for many workers arrive
/// together. Workers are returned in ascending ID order.
pub fn summarize_by_worker(
    entries: &[WorkLogEntry],
    config: &CommissionConfig,
) -> Vec<WorkerSummary> {
    let mut by_worker: BTreeMap<&str, Vec<&WorkLogEntry>> = BTreeMap::new();
    for entry in entries {
        by_worker.entry(entry.worker_id.as_str()).or_default().push(entry);
    }

    by_worker
        .into_iter()
        .map(|(worker_id, group)| {
            let summary = sum_entries(group.iter().copied(), config);
            let unpaid_hours = sum_unpaid_hours(group.iter().copied());
            WorkerSummary {
                worker_id: worker_id.to_string(),
                direction: summary.direction(),
                summary,
                unpaid_hours,
            }
        })
        .collect()
}
