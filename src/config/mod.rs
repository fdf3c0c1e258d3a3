//! Configuration loading and management for the care payments engine.
//!
//! This module loads the commission regime (quick-service flat fee and
//! private-care commission fraction) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use care_payments::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payments.yaml").unwrap();
//! println!("Commission: {}", config.commission().private_care_commission_fraction);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::CommissionConfig;
