//! In-Memory Household Store Adapter
//!
//! Stores household records in memory. Useful for testing and
//! development; the hosted data store is wired in behind the same
//! ports in deployed environments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{HouseholdId, UserId};
use crate::domain::household::Household;
use crate::ports::{HouseholdReader, HouseholdRepository, HouseholdStoreError};

/// In-memory storage for household records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHouseholdStore {
    households: Arc<RwLock<HashMap<HouseholdId, Household>>>,
}

impl InMemoryHouseholdStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored data (useful for tests).
    pub async fn clear(&self) {
        self.households.write().await.clear();
    }

    /// Get the number of stored households.
    pub async fn count(&self) -> usize {
        self.households.read().await.len()
    }
}

#[async_trait]
impl HouseholdRepository for InMemoryHouseholdStore {
    async fn create(&self, household: &Household) -> Result<(), HouseholdStoreError> {
        let mut households = self.households.write().await;
        if households.contains_key(household.id()) {
            return Err(HouseholdStoreError::AlreadyExists(*household.id()));
        }
        households.insert(*household.id(), household.clone());
        Ok(())
    }

    async fn update(&self, household: &Household) -> Result<(), HouseholdStoreError> {
        let mut households = self.households.write().await;
        match households.get(household.id()) {
            None => Err(HouseholdStoreError::NotFound(*household.id())),
            Some(existing) if !existing.is_owner(household.user_id()) => {
                Err(HouseholdStoreError::Unauthorized)
            }
            Some(_) => {
                households.insert(*household.id(), household.clone());
                Ok(())
            }
        }
    }

    async fn delete(&self, id: HouseholdId, user_id: &UserId) -> Result<(), HouseholdStoreError> {
        let mut households = self.households.write().await;
        match households.get(&id) {
            None => Err(HouseholdStoreError::NotFound(id)),
            Some(existing) if !existing.is_owner(user_id) => Err(HouseholdStoreError::Unauthorized),
            Some(_) => {
                households.remove(&id);
                Ok(())
            }
        }
    }
}

#[async_trait]
impl HouseholdReader for InMemoryHouseholdStore {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Household>, HouseholdStoreError> {
        let households = self.households.read().await;
        let mut owned: Vec<Household> = households
            .values()
            .filter(|h| h.is_owner(user_id))
            .cloned()
            .collect();
        // HashMap iteration order is arbitrary; present records in creation order.
        owned.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(owned)
    }

    async fn find_by_id(
        &self,
        id: HouseholdId,
        user_id: &UserId,
    ) -> Result<Household, HouseholdStoreError> {
        let households = self.households.read().await;
        match households.get(&id) {
            None => Err(HouseholdStoreError::NotFound(id)),
            Some(existing) if !existing.is_owner(user_id) => Err(HouseholdStoreError::Unauthorized),
            Some(existing) => Ok(existing.clone()),
        }
    }
}
