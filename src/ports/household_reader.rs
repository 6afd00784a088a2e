use async_trait::async_trait;

use crate::domain::foundation::{HouseholdId, UserId};
use crate::domain::household::Household;

use super::HouseholdStoreError;

/// Read-only port for household queries.
#[async_trait]
pub trait HouseholdReader: Send + Sync {
    /// Lists all households owned by the user, in creation order.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Household>, HouseholdStoreError>;

    /// Fetches one household, verifying ownership.
    async fn find_by_id(
        &self,
        id: HouseholdId,
        user_id: &UserId,
    ) -> Result<Household, HouseholdStoreError>;
}
