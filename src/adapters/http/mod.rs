//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod common;
pub mod household;
pub mod overlap;

// Re-export key types for convenience
pub use common::{AuthenticatedUser, ErrorResponse};
pub use household::{household_routes, HouseholdAppState};
pub use overlap::{overlap_routes, OverlapAppState};
