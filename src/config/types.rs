//! Configuration types for payment calculation.
//!
//! This module contains the strongly-typed commission configuration that is
//! deserialized from YAML.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_quick_service_flat_fee() -> Decimal {
    Decimal::new(300, 2)
}

fn default_private_care_commission_fraction() -> Decimal {
    Decimal::new(20, 2)
}

fn default_currency() -> String {
    "JOD".to_string()
}

/// The commission regime applied to workers' unpaid entries.
///
/// Missing keys fall back to the reference regime: a 3.00 flat fee per
/// quick-service entry and a 20% commission on private-care hours.
///
/// # Example
///
/// ```
/// use care_payments::config::CommissionConfig;
/// use rust_decimal::Decimal;
///
/// let config: CommissionConfig =
///     serde_yaml::from_str("private_care_commission_fraction: \"0.10\"").unwrap();
/// assert_eq!(config.quick_service_flat_fee, Decimal::new(300, 2));
/// assert_eq!(config.worker_share_fraction(), Decimal::new(90, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionConfig {
    /// Flat commission charged once per quick-service entry.
    #[serde(default = "default_quick_service_flat_fee")]
    pub quick_service_flat_fee: Decimal,
    /// Fraction of a private-care hourly price retained by the platform.
    #[serde(default = "default_private_care_commission_fraction")]
    pub private_care_commission_fraction: Decimal,
    /// ISO currency code the amounts are expressed in.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for CommissionConfig {
    fn default() -> Self {
        Self {
            quick_service_flat_fee: default_quick_service_flat_fee(),
            private_care_commission_fraction: default_private_care_commission_fraction(),
            currency: default_currency(),
        }
    }
}

impl CommissionConfig {
    /// Returns the fraction of a private-care price kept by the worker.
    pub fn worker_share_fraction(&self) -> Decimal {
        Decimal::ONE - self.private_care_commission_fraction
    }

    /// Checks every field is within its allowed range.
    pub fn validate(&self) -> EngineResult<()> {
        if self.quick_service_flat_fee < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "quick_service_flat_fee".to_string(),
                message: format!("cannot be negative (got {})", self.quick_service_flat_fee),
            });
        }

        let fraction = self.private_care_commission_fraction;
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                field: "private_care_commission_fraction".to_string(),
                message: format!("must be between 0 and 1 (got {})", fraction),
            });
        }

        if self.currency.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "currency".to_string(),
                message: "cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
