//! AnalyzeOverlapsHandler - Query handler for cross-household conflict analysis.
//!
//! Loads the user's households and runs the pure analyzer over them.
//! All I/O happens here; the analyzer itself stays synchronous and pure.

use std::sync::Arc;

use crate::domain::foundation::{MoveDate, UserId};
use crate::domain::overlap::{analyze_household_overlaps, OverlapAnalysis};
use crate::ports::{HouseholdReader, HouseholdStoreError};

/// Query to analyze overlaps across a user's households.
#[derive(Debug, Clone)]
pub struct AnalyzeOverlapsQuery {
    pub user_id: UserId,
    /// Reference date for the timeline detector; defaults to today (UTC).
    pub today: Option<MoveDate>,
}

/// Handler for running the overlap analysis.
pub struct AnalyzeOverlapsHandler {
    reader: Arc<dyn HouseholdReader>,
}

impl AnalyzeOverlapsHandler {
    pub fn new(reader: Arc<dyn HouseholdReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: AnalyzeOverlapsQuery,
    ) -> Result<OverlapAnalysis, HouseholdStoreError> {
        let households = self.reader.list_for_user(&query.user_id).await?;
        let today = query.today.unwrap_or_else(MoveDate::today);

        let analysis = analyze_household_overlaps(&households, &today);
        tracing::debug!(
            household_count = households.len(),
            overlap_count = analysis.overlaps.len(),
            "overlap analysis completed"
        );
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryHouseholdStore;
    use crate::domain::foundation::HouseholdId;
    use crate::domain::household::Household;
    use crate::domain::overlap::{OverlapType, Severity};
    use crate::ports::HouseholdRepository;

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    async fn seed(store: &InMemoryHouseholdStore, name: &str, date: &str) {
        let household = Household::new(
            HouseholdId::new(),
            owner(),
            name.to_string(),
            MoveDate::parse(date).unwrap(),
            2,
            None,
            None,
            vec![],
        )
        .unwrap();
        store.create(&household).await.unwrap();
    }

    #[tokio::test]
    async fn analyzes_the_users_households() {
        let store = Arc::new(InMemoryHouseholdStore::new());
        seed(&store, "Familie A", "2025-06-10").await;
        seed(&store, "Familie B", "2025-06-10").await;

        let handler = AnalyzeOverlapsHandler::new(store);
        let analysis = handler
            .handle(AnalyzeOverlapsQuery {
                user_id: owner(),
                today: Some(MoveDate::parse("2025-05-01").unwrap()),
            })
            .await
            .unwrap();

        assert!(analysis.has_conflicts);
        assert_eq!(analysis.overlaps[0].overlap_type, OverlapType::MoveDateConflict);
        assert_eq!(analysis.overlaps[0].severity, Severity::Critical);
    }

    #[tokio::test]
    async fn empty_store_yields_no_conflicts() {
        let store = Arc::new(InMemoryHouseholdStore::new());
        let handler = AnalyzeOverlapsHandler::new(store);

        let analysis = handler
            .handle(AnalyzeOverlapsQuery {
                user_id: owner(),
                today: None,
            })
            .await
            .unwrap();
        assert!(!analysis.has_conflicts);
        assert!(analysis.overlaps.is_empty());
    }

    #[tokio::test]
    async fn injected_date_controls_the_timeline_window() {
        let store = Arc::new(InMemoryHouseholdStore::new());
        seed(&store, "Familie A", "2025-06-05").await;
        seed(&store, "Familie B", "2025-06-15").await;
        seed(&store, "Familie C", "2025-06-25").await;

        let handler = AnalyzeOverlapsHandler::new(store);

        let near = handler
            .handle(AnalyzeOverlapsQuery {
                user_id: owner(),
                today: Some(MoveDate::parse("2025-06-01").unwrap()),
            })
            .await
            .unwrap();
        assert!(near
            .overlaps
            .iter()
            .any(|o| o.overlap_type == OverlapType::TimelineConflict));

        let far = handler
            .handle(AnalyzeOverlapsQuery {
                user_id: owner(),
                today: Some(MoveDate::parse("2024-06-01").unwrap()),
            })
            .await
            .unwrap();
        assert!(!far
            .overlaps
            .iter()
            .any(|o| o.overlap_type == OverlapType::TimelineConflict));
    }
}
