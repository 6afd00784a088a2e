//! Household module - entities for one planned residential move.

mod aggregate;
mod member;

pub use aggregate::{Household, MAX_NAME_LENGTH};
pub use member::Member;
