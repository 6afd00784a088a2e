//! DeleteHouseholdHandler - Command handler for removing a household record.

use std::sync::Arc;

use crate::domain::foundation::{HouseholdId, UserId};
use crate::ports::{HouseholdRepository, HouseholdStoreError};

/// Command to delete a household.
#[derive(Debug, Clone)]
pub struct DeleteHouseholdCommand {
    pub household_id: HouseholdId,
    pub user_id: UserId,
}

/// Handler for deleting household records.
pub struct DeleteHouseholdHandler {
    repository: Arc<dyn HouseholdRepository>,
}

impl DeleteHouseholdHandler {
    pub fn new(repository: Arc<dyn HouseholdRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, command: DeleteHouseholdCommand) -> Result<(), HouseholdStoreError> {
        self.repository
            .delete(command.household_id, &command.user_id)
            .await?;

        tracing::info!(household_id = %command.household_id, "household deleted");
        Ok(())
    }
}
