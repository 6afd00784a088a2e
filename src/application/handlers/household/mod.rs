//! Household command and query handlers.

mod create_household;
mod delete_household;
mod get_household;
mod list_households;
mod update_household;

pub use create_household::{CreateHouseholdCommand, CreateHouseholdHandler};
pub use delete_household::{DeleteHouseholdCommand, DeleteHouseholdHandler};
pub use get_household::{GetHouseholdHandler, GetHouseholdQuery};
pub use list_households::{ListHouseholdsHandler, ListHouseholdsQuery};
pub use update_household::{UpdateHouseholdCommand, UpdateHouseholdHandler};

use crate::domain::foundation::DomainError;
use crate::ports::HouseholdStoreError;

/// Errors from household command handlers: either the aggregate
/// rejected the input or the store failed.
#[derive(Debug, thiserror::Error)]
pub enum HouseholdCommandError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] HouseholdStoreError),
}
