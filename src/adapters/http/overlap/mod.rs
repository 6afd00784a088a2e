//! HTTP adapter for overlap analysis endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OverlapAppState;
pub use routes::overlap_routes;
