//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Umzugsplan domain.

mod errors;
mod ids;
mod move_date;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{HouseholdId, UserId};
pub use move_date::MoveDate;
pub use timestamp::Timestamp;
