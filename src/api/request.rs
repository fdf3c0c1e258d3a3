//! Request types for the care payments API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkLogEntry;

/// Request body for the `/payments/calculate` endpoint.
///
/// Carries one worker's work-log entries, as fetched from the datastore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The worker the entries belong to.
    pub worker_id: String,
    /// The worker's work-log entries.
    #[serde(default)]
    pub entries: Vec<WorkLogEntry>,
}

/// Request body for the `/payments/summary` endpoint.
///
/// Carries entries for any number of workers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Work-log entries across workers.
    #[serde(default)]
    pub entries: Vec<WorkLogEntry>,
}

/// Rejects entries with negative hours, a negative price, or a price and
/// hours whose product does not fit in a `Decimal`.
///
/// The calculator tolerates such entries, but input arriving over the API
/// is treated as a form submission and reported back instead.
pub fn validate_entries(entries: &[WorkLogEntry]) -> EngineResult<()> {
    for entry in entries {
        if entry.hours.is_some_and(|h| h < Decimal::ZERO) {
            return Err(EngineError::InvalidEntry {
                entry_id: entry.id.clone(),
                message: "hours cannot be negative".to_string(),
            });
        }
        if entry.price.is_some_and(|p| p < Decimal::ZERO) {
            return Err(EngineError::InvalidEntry {
                entry_id: entry.id.clone(),
                message: "price cannot be negative".to_string(),
            });
        }
        if entry.price_or_zero().checked_mul(entry.hours_or_zero()).is_none() {
            return Err(EngineError::InvalidEntry {
                entry_id: entry.id.clone(),
                message: "price multiplied by hours is too large".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "worker_id": "nurse_01",
            "entries": [
                {
                    "id": "log_001",
                    "worker_id": "nurse_01",
                    "hours": "2",
                    "service_types": ["blood_test"],
                    "payment_method": "cash"
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.worker_id, "nurse_01");
        assert_eq!(request.entries.len(), 1);
    }

    #[test]
    fn test_missing_entries_defaults_to_empty() {
        let request: SummaryRequest = serde_json::from_str("{}").unwrap();
        assert!(request.entries.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        let request: SummaryRequest = serde_json::from_str(
            r#"{ "entries": [{ "id": "log_009", "worker_id": "n", "hours": "-1" }] }"#,
        )
        .unwrap();

        match validate_entries(&request.entries) {
            Err(EngineError::InvalidEntry { entry_id, message }) => {
                assert_eq!(entry_id, "log_009");
                assert!(message.contains("hours"));
            }
            other => panic!("Expected InvalidEntry, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let request: SummaryRequest = serde_json::from_str(
            r#"{ "entries": [{ "id": "log_010", "worker_id": "n", "price": "-5" }] }"#,
        )
        .unwrap();

        assert!(validate_entries(&request.entries).is_err());
    }

    #[test]
    fn test_validate_accepts_missing_numbers() {
        let request: SummaryRequest = serde_json::from_str(
            r#"{ "entries": [{ "id": "log_011", "worker_id": "n" }] }"#,
        )
        .unwrap();

        assert!(validate_entries(&request.entries).is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_amount() {
        let request: SummaryRequest = serde_json::from_str(
            r#"{ "entries": [{
                "id": "log_012",
                "worker_id": "n",
                "hours": "1000000",
                "price": "79228162514264337593543950",
                "service_types": ["full_time"]
            }] }"#,
        )
        .unwrap();

        match validate_entries(&request.entries) {
            Err(EngineError::InvalidEntry { entry_id, message }) => {
                assert_eq!(entry_id, "log_012");
                assert!(message.contains("too large"));
            }
            other => panic!("Expected InvalidEntry, got {:?}", other),
        }
    }
}
