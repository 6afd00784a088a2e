//! CreateHouseholdHandler - Command handler for creating a household record.

use std::sync::Arc;

use crate::domain::foundation::{HouseholdId, MoveDate, UserId};
use crate::domain::household::{Household, Member};
use crate::ports::HouseholdRepository;

use super::HouseholdCommandError;

/// Command to create a new household.
#[derive(Debug, Clone)]
pub struct CreateHouseholdCommand {
    pub user_id: UserId,
    pub name: String,
    pub move_date: MoveDate,
    pub household_size: u32,
    pub old_address: Option<String>,
    pub new_address: Option<String>,
    pub members: Vec<Member>,
}

/// Handler for creating household records.
pub struct CreateHouseholdHandler {
    repository: Arc<dyn HouseholdRepository>,
}

impl CreateHouseholdHandler {
    pub fn new(repository: Arc<dyn HouseholdRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        command: CreateHouseholdCommand,
    ) -> Result<Household, HouseholdCommandError> {
        let household = Household::new(
            HouseholdId::new(),
            command.user_id,
            command.name,
            command.move_date,
            command.household_size,
            command.old_address,
            command.new_address,
            command.members,
        )?;

        self.repository.create(&household).await?;

        tracing::info!(household_id = %household.id(), "household created");
        Ok(household)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHouseholdStore;
    use crate::domain::foundation::ErrorCode;

    fn command(name: &str, size: u32) -> CreateHouseholdCommand {
        CreateHouseholdCommand {
            user_id: UserId::new("user-1").unwrap(),
            name: name.to_string(),
            move_date: MoveDate::parse("2025-06-10").unwrap(),
            household_size: size,
            old_address: Some("Hauptstraße 1".to_string()),
            new_address: None,
            members: vec![],
        }
    }

    #[tokio::test]
    async fn creates_household_and_persists_it() {
        let store = Arc::new(InMemoryHouseholdStore::new());
        let handler = CreateHouseholdHandler::new(store.clone());

        let household = handler.handle(command("Familie A", 4)).await.unwrap();
        assert_eq!(household.name(), "Familie A");
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn rejects_invalid_household_without_persisting() {
        let store = Arc::new(InMemoryHouseholdStore::new());
        let handler = CreateHouseholdHandler::new(store.clone());

        let result = handler.handle(command("Familie A", 0)).await;
        match result {
            Err(HouseholdCommandError::Domain(err)) => assert_eq!(err.code, ErrorCode::OutOfRange),
            other => panic!("Expected domain error, got {:?}", other.map(|h| h.name().to_string())),
        }
        assert_eq!(store.count().await, 0);
    }
}
