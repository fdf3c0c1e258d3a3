//! Quick-service flat commission.
//!
//! Quick-service visits (blood tests, injections, IV therapy, patient care,
//! vital-signs checks) carry a flat commission per entry. Who owes it depends
//! on who collected the patient's payment.

use rust_decimal::Decimal;

use crate::config::CommissionConfig;
use crate::models::{AuditStep, ContributionKind, EntryContribution, ServiceCategory, WorkLogEntry};

/// Rule identifier recorded in the audit trace.
pub const QUICK_SERVICE_RULE_ID: &str = "quick_service_flat_fee";

/// The result of applying the flat fee, including the audit step.
#[derive(Debug, Clone)]
pub struct QuickServiceFeeResult {
    /// The entry's effect on the totals.
    pub contribution: EntryContribution,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the flat quick-service commission to an entry.
///
/// The fee is charged once per entry regardless of hours. When the patient
/// paid the worker in cash, the worker owes the platform the fee; otherwise
/// the platform collected payment and owes the worker the fee.
///
/// # Examples
///
/// ```
/// use care_payments::calculation::quick_service_fee;
/// use care_payments::config::CommissionConfig;
/// use care_payments::models::{PaymentMethod, ServiceType, WorkLogEntry};
/// use rust_decimal::Decimal;
///
/// let entry = WorkLogEntry {
///     id: "log_001".to_string(),
///     worker_id: "nurse_01".to_string(),
///     request_id: None,
///     hours: Some(Decimal::from(2)),
///     is_paid: false,
///     service_types: vec![ServiceType::BloodTest],
///     price: None,
///     payment_method: Some(PaymentMethod::Cash),
///     logged_on: None,
/// };
///
/// let result = quick_service_fee(&entry, &CommissionConfig::default(), 1);
/// assert_eq!(result.contribution.owed_by_worker, Decimal::new(300, 2));
/// assert_eq!(result.contribution.owed_to_worker, Decimal::ZERO);
/// ```
pub fn quick_service_fee(
    entry: &WorkLogEntry,
    config: &CommissionConfig,
    step_number: u32,
) -> QuickServiceFeeResult {
    let contribution = quick_service_contribution(entry, config);
    let fee = contribution.rate;
    let method = if entry.is_cash() { "cash" } else { "electronic" };

    let reasoning = if entry.is_cash() {
        format!(
            "Worker collected cash, owes platform flat fee {} {}",
            fee.normalize(),
            config.currency
        )
    } else {
        format!(
            "Platform collected {} payment, owes worker flat fee {} {}",
            method,
            fee.normalize(),
            config.currency
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: QUICK_SERVICE_RULE_ID.to_string(),
        rule_name: "Quick Service Flat Fee".to_string(),
        entry_id: entry.id.clone(),
        input: serde_json::json!({
            "payment_method": method,
            "hours": contribution.hours.normalize().to_string(),
            "flat_fee": fee.normalize().to_string()
        }),
        output: serde_json::json!({
            "owed_to_worker": contribution.owed_to_worker.normalize().to_string(),
            "owed_by_worker": contribution.owed_by_worker.normalize().to_string()
        }),
        reasoning,
    };

    QuickServiceFeeResult {
        contribution,
        audit_step,
    }
}

/// The flat fee without an audit step.
pub(crate) fn quick_service_contribution(
    entry: &WorkLogEntry,
    config: &CommissionConfig,
) -> EntryContribution {
    let fee = config.quick_service_flat_fee;
    let (kind, owed_to_worker, owed_by_worker) = if entry.is_cash() {
        (ContributionKind::FlatFeeOwedByWorker, Decimal::ZERO, fee)
    } else {
        (ContributionKind::FlatFeeOwedToWorker, fee, Decimal::ZERO)
    };

    EntryContribution {
        entry_id: entry.id.clone(),
        category: Some(ServiceCategory::QuickService),
        kind,
        hours: entry.hours_or_zero(),
        rate: fee,
        owed_to_worker,
        owed_by_worker,
    }
}
