//! Error types for the care payments engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The payment calculator itself is total and never fails; these errors come
//! from loading configuration and from validating input at the API boundary.

use thiserror::Error;

/// The main error type for the care payments engine.
///
/// # Example
///
/// ```
/// use care_payments::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payments.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payments.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A work-log entry submitted through the API failed validation.
    #[error("Invalid work log entry '{entry_id}': {message}")]
    InvalidEntry {
        /// The ID of the rejected entry.
        entry_id: String,
        /// A description of what made the entry invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
