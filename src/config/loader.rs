//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the commission
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::CommissionConfig;

/// Loads and provides access to the commission configuration.
///
/// # File Format
///
/// ```text
/// quick_service_flat_fee: "3.00"
/// private_care_commission_fraction: "0.20"
/// currency: JOD
/// ```
///
/// # Example
///
/// ```no_run
/// use care_payments::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payments.yaml").unwrap();
/// println!("Flat fee: {}", loader.commission().quick_service_flat_fee);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    commission: CommissionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A value is outside its allowed range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let commission = Self::load_yaml::<CommissionConfig>(path)?;
        commission.validate()?;

        info!(
            path = %path.display(),
            flat_fee = %commission.quick_service_flat_fee,
            commission_fraction = %commission.private_care_commission_fraction,
            currency = %commission.currency,
            "Loaded commission configuration"
        );

        Ok(Self { commission })
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(commission: CommissionConfig) -> EngineResult<Self> {
        commission.validate()?;
        Ok(Self { commission })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the commission configuration.
    pub fn commission(&self) -> &CommissionConfig {
        &self.commission
    }
}
