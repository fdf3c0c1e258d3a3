//! Private-care hourly share.
//!
//! Private care is billed per hour at the originating request's price. The
//! platform keeps its commission fraction and the worker is owed the rest.

use rust_decimal::Decimal;

use crate::config::CommissionConfig;
use crate::models::{AuditStep, ContributionKind, EntryContribution, WorkLogEntry};

/// Rule identifier recorded in the audit trace.
pub const PRIVATE_CARE_RULE_ID: &str = "private_care_hourly_share";

/// The result of applying the hourly share, including the audit step.
#[derive(Debug, Clone)]
pub struct PrivateCareShareResult {
    /// The entry's effect on the totals.
    pub contribution: EntryContribution,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the worker's share of a private-care entry.
///
/// `share = price x (1 - commission_fraction)`, and `share x hours` is owed to
/// the worker. An entry with no price (absent or zero) contributes nothing, as
/// does one with a negative price, negative hours or an amount that overflows.
///
/// # Examples
///
/// ```
/// use care_payments::calculation::private_care_share;
/// use care_payments::config::CommissionConfig;
/// use care_payments::models::{ServiceType, WorkLogEntry};
/// use rust_decimal::Decimal;
///
/// let entry = WorkLogEntry {
///     id: "log_002".to_string(),
///     worker_id: "nurse_01".to_string(),
///     request_id: None,
///     hours: Some(Decimal::from(4)),
///     is_paid: false,
///     service_types: vec![ServiceType::FullTime],
///     price: Some(Decimal::from(12)),
///     payment_method: None,
///     logged_on: None,
/// };
///
/// let result = private_care_share(&entry, &CommissionConfig::default(), 1);
/// assert_eq!(result.contribution.owed_to_worker, Decimal::new(384, 1));
/// ```
pub fn private_care_share(
    entry: &WorkLogEntry,
    config: &CommissionConfig,
    step_number: u32,
) -> PrivateCareShareResult {
    let contribution = private_care_contribution(entry, config);
    let hours = entry.hours_or_zero();
    let price = entry.price_or_zero();
    let fraction = config.private_care_commission_fraction;

    let input = serde_json::json!({
        "price": price.normalize().to_string(),
        "hours": hours.normalize().to_string(),
        "commission_fraction": fraction.normalize().to_string()
    });

    let (output, reasoning) = match contribution.kind {
        ContributionKind::HourlyShareOwedToWorker => (
            serde_json::json!({
                "hourly_share": contribution.rate.normalize().to_string(),
                "owed_to_worker": contribution.owed_to_worker.normalize().to_string(),
                "applied": true
            }),
            format!(
                "{} x (1 - {}) x {}h = {} {}",
                price.normalize(),
                fraction.normalize(),
                hours.normalize(),
                contribution.owed_to_worker.normalize(),
                config.currency
            ),
        ),
        ContributionKind::SkippedNoPrice => (
            serde_json::json!({ "owed_to_worker": "0", "applied": false }),
            "No hourly price on the request, nothing to compute".to_string(),
        ),
        _ if price < Decimal::ZERO || hours < Decimal::ZERO => (
            serde_json::json!({ "owed_to_worker": "0", "applied": false }),
            "Negative price or hours, entry contributes nothing".to_string(),
        ),
        _ => (
            serde_json::json!({ "owed_to_worker": "0", "applied": false }),
            "Hourly amount exceeds the decimal range, entry contributes nothing".to_string(),
        ),
    };

    PrivateCareShareResult {
        contribution,
        audit_step: AuditStep {
            step_number,
            rule_id: PRIVATE_CARE_RULE_ID.to_string(),
            rule_name: "Private Care Hourly Share".to_string(),
            entry_id: entry.id.clone(),
            input,
            output,
            reasoning,
        },
    }
}

/// The hourly share without an audit step.
///
/// Negative inputs, and amounts too large for a `Decimal`, are malformed.
pub(crate) fn private_care_contribution(
    entry: &WorkLogEntry,
    config: &CommissionConfig,
) -> EntryContribution {
    let category = entry.category();
    let hours = entry.hours_or_zero();
    let price = entry.price_or_zero();
    let skipped = |kind| EntryContribution::skipped(&entry.id, category, kind, hours);

    if price < Decimal::ZERO || hours < Decimal::ZERO {
        return skipped(ContributionKind::SkippedMalformed);
    }
    if price.is_zero() {
        return skipped(ContributionKind::SkippedNoPrice);
    }

    match hourly_amounts(price, hours, config) {
        Some((share, owed_to_worker)) => EntryContribution {
            entry_id: entry.id.clone(),
            category,
            kind: ContributionKind::HourlyShareOwedToWorker,
            hours,
            rate: share,
            owed_to_worker,
            owed_by_worker: Decimal::ZERO,
        },
        None => skipped(ContributionKind::SkippedMalformed),
    }
}

fn hourly_amounts(
    price: Decimal,
    hours: Decimal,
    config: &CommissionConfig,
) -> Option<(Decimal, Decimal)> {
    let share = price.checked_mul(config.worker_share_fraction())?;
    let owed_to_worker = share.checked_mul(hours)?;
    Some((share, owed_to_worker))
}
