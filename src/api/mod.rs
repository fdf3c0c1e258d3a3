//! HTTP API module for the care payments engine.
//!
//! This module provides the REST endpoints that compute worker payment
//! summaries from work-log entries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, SummaryRequest, validate_entries};
pub use response::{ApiError, SummaryResponse};
pub use state::AppState;
