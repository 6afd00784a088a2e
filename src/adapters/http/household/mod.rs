//! HTTP adapter for household endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::HouseholdAppState;
pub use routes::household_routes;
