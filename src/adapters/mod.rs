//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API endpoints (axum)
//! - `storage` - Household store implementations

pub mod http;
pub mod storage;
