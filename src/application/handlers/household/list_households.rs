//! ListHouseholdsHandler - Query handler for listing a user's households.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::household::Household;
use crate::ports::{HouseholdReader, HouseholdStoreError};

/// Query to list all households owned by a user.
#[derive(Debug, Clone)]
pub struct ListHouseholdsQuery {
    pub user_id: UserId,
}

/// Handler for listing household records.
pub struct ListHouseholdsHandler {
    reader: Arc<dyn HouseholdReader>,
}

impl ListHouseholdsHandler {
    pub fn new(reader: Arc<dyn HouseholdReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListHouseholdsQuery,
    ) -> Result<Vec<Household>, HouseholdStoreError> {
        self.reader.list_for_user(&query.user_id).await
    }
}
