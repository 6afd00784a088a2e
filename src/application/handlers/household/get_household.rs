//! GetHouseholdHandler - Query handler for fetching one household.

use std::sync::Arc;

use crate::domain::foundation::{HouseholdId, UserId};
use crate::domain::household::Household;
use crate::ports::{HouseholdReader, HouseholdStoreError};

/// Query to fetch a single household.
#[derive(Debug, Clone)]
pub struct GetHouseholdQuery {
    pub household_id: HouseholdId,
    pub user_id: UserId,
}

/// Handler for fetching a single household record.
pub struct GetHouseholdHandler {
    reader: Arc<dyn HouseholdReader>,
}

impl GetHouseholdHandler {
    pub fn new(reader: Arc<dyn HouseholdReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: GetHouseholdQuery) -> Result<Household, HouseholdStoreError> {
        self.reader
            .find_by_id(query.household_id, &query.user_id)
            .await
    }
}
