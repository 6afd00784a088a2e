use async_trait::async_trait;

use crate::domain::foundation::{HouseholdId, UserId};
use crate::domain::household::Household;

/// Write port for household records.
#[async_trait]
pub trait HouseholdRepository: Send + Sync {
    /// Persists a new household.
    async fn create(&self, household: &Household) -> Result<(), HouseholdStoreError>;

    /// Replaces an existing household.
    async fn update(&self, household: &Household) -> Result<(), HouseholdStoreError>;

    /// Removes a household owned by the given user.
    async fn delete(&self, id: HouseholdId, user_id: &UserId) -> Result<(), HouseholdStoreError>;
}

/// Errors that can occur against the household store.
#[derive(Debug, thiserror::Error)]
pub enum HouseholdStoreError {
    #[error("Household not found: {0}")]
    NotFound(HouseholdId),

    #[error("Household already exists: {0}")]
    AlreadyExists(HouseholdId),

    #[error("Unauthorized access to household")]
    Unauthorized,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
