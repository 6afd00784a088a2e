//! UpdateHouseholdHandler - Command handler for editing a household record.

use std::sync::Arc;

use crate::domain::foundation::{HouseholdId, MoveDate, UserId};
use crate::domain::household::{Household, Member};
use crate::ports::{HouseholdReader, HouseholdRepository};

use super::HouseholdCommandError;

/// Command to update an existing household.
#[derive(Debug, Clone)]
pub struct UpdateHouseholdCommand {
    pub household_id: HouseholdId,
    pub user_id: UserId,
    pub name: String,
    pub move_date: MoveDate,
    pub household_size: u32,
    pub old_address: Option<String>,
    pub new_address: Option<String>,
    pub members: Vec<Member>,
}

/// Handler for updating household records.
///
/// Loads the current record (verifying ownership), applies the new
/// field values through the aggregate, and persists the result.
pub struct UpdateHouseholdHandler {
    reader: Arc<dyn HouseholdReader>,
    repository: Arc<dyn HouseholdRepository>,
}

impl UpdateHouseholdHandler {
    pub fn new(reader: Arc<dyn HouseholdReader>, repository: Arc<dyn HouseholdRepository>) -> Self {
        Self { reader, repository }
    }

    pub async fn handle(
        &self,
        command: UpdateHouseholdCommand,
    ) -> Result<Household, HouseholdCommandError> {
        let mut household = self
            .reader
            .find_by_id(command.household_id, &command.user_id)
            .await?;

        household.update(
            command.name,
            command.move_date,
            command.household_size,
            command.old_address,
            command.new_address,
            command.members,
        )?;

        self.repository.update(&household).await?;

        tracing::info!(household_id = %household.id(), "household updated");
        Ok(household)
    }
}
