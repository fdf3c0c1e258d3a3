//! Work-log entry model.
//!
//! A [`WorkLogEntry`] is a unit of completed work a worker logged against a
//! care request. Entries are produced and marked paid by the backend; this
//! crate only reads them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ServiceCategory, ServiceType, classify_entry};

/// How the patient paid for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// The worker collected cash from the patient directly.
    Cash,
    /// The platform collected payment electronically.
    Electronic,
}

/// A logged unit of work, joined with its originating request's pricing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLogEntry {
    /// Unique identifier for the log entry.
    pub id: String,
    /// The worker who logged the hours.
    pub worker_id: String,
    /// The care request the hours were logged against.
    #[serde(default)]
    pub request_id: Option<String>,
    /// Hours worked. Absent is treated as zero.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// Whether a payment run has already settled this entry.
    #[serde(default)]
    pub is_paid: bool,
    /// Category tags of the originating request.
    #[serde(default)]
    pub service_types: Vec<ServiceType>,
    /// Hourly price of the originating request (private care only).
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Payment method of the originating request (quick service only).
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// The day the work was logged.
    #[serde(default)]
    pub logged_on: Option<NaiveDate>,
}

impl WorkLogEntry {
    /// Returns the entry's payment category, or `None` when it has no tags.
    pub fn category(&self) -> Option<ServiceCategory> {
        classify_entry(&self.service_types)
    }

    /// Returns the logged hours, with absent hours read as zero.
    pub fn hours_or_zero(&self) -> Decimal {
        self.hours.unwrap_or(Decimal::ZERO)
    }

    /// Returns the request price, with absent price read as zero.
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the patient paid this entry's request in cash.
    pub fn is_cash(&self) -> bool {
        self.payment_method == Some(PaymentMethod::Cash)
    }
}
