//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `household` - Household aggregate and member roster
//! - `overlap` - Pure domain services for cross-household conflict analysis

pub mod foundation;
pub mod household;
pub mod overlap;
