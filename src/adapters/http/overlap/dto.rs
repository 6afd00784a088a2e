//! HTTP DTOs for overlap analysis endpoints.
//!
//! The analysis endpoints are read-only and the domain result types
//! are already designed for serialization, so they are re-exported.

pub use crate::adapters::http::common::ErrorResponse;
pub use crate::domain::overlap::{HouseholdOverlap, OverlapAnalysis, OverlapType, Severity};

use serde::Serialize;

/// Response wrapper for the text summary endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
