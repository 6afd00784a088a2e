//! HTTP DTOs for household endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::household::{Household, Member};

pub use crate::adapters::http::common::ErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One roster entry in a request body.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberDto {
    pub name: String,
    pub email: String,
}

impl MemberDto {
    pub fn into_member(self) -> Result<Member, ValidationError> {
        Member::new(self.name, self.email)
    }
}

/// Body for creating or updating a household.
///
/// The move date arrives as free text and is validated at this
/// boundary; an unparsable date is rejected with 400 and never
/// reaches the domain.
#[derive(Debug, Clone, Deserialize)]
pub struct HouseholdRequest {
    pub name: String,
    /// Calendar date as `YYYY-MM-DD`.
    pub move_date: String,
    pub household_size: u32,
    #[serde(default)]
    pub old_address: Option<String>,
    #[serde(default)]
    pub new_address: Option<String>,
    #[serde(default)]
    pub members: Vec<MemberDto>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One roster entry in a response body.
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub name: String,
    pub email: String,
}

/// A household as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct HouseholdResponse {
    pub id: String,
    pub name: String,
    pub move_date: String,
    pub household_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_address: Option<String>,
    pub members: Vec<MemberResponse>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Household> for HouseholdResponse {
    fn from(household: &Household) -> Self {
        Self {
            id: household.id().to_string(),
            name: household.name().to_string(),
            move_date: household.move_date().to_string(),
            household_size: household.household_size(),
            old_address: household.old_address().map(str::to_string),
            new_address: household.new_address().map(str::to_string),
            members: household
                .members()
                .iter()
                .map(|m| MemberResponse {
                    name: m.name().to_string(),
                    email: m.email().to_string(),
                })
                .collect(),
            created_at: *household.created_at(),
            updated_at: *household.updated_at(),
        }
    }
}

/// List wrapper for household collections.
#[derive(Debug, Clone, Serialize)]
pub struct HouseholdListResponse {
    pub households: Vec<HouseholdResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{HouseholdId, MoveDate, UserId};

    #[test]
    fn request_deserializes_with_optional_fields_missing() {
        let json = r#"{ "name": "Familie A", "move_date": "2025-06-10", "household_size": 3 }"#;
        let request: HouseholdRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Familie A");
        assert!(request.old_address.is_none());
        assert!(request.members.is_empty());
    }

    #[test]
    fn member_dto_validation_rejects_blank_email() {
        let dto = MemberDto {
            name: "Anna".to_string(),
            email: "  ".to_string(),
        };
        assert!(dto.into_member().is_err());
    }

    #[test]
    fn response_mirrors_the_aggregate() {
        let household = Household::new(
            HouseholdId::new(),
            UserId::new("user-1").unwrap(),
            "Familie A".to_string(),
            MoveDate::parse("2025-06-10").unwrap(),
            4,
            Some("Hauptstraße 1".to_string()),
            None,
            vec![Member::new("Anna", "anna@example.com").unwrap()],
        )
        .unwrap();

        let response = HouseholdResponse::from(&household);
        assert_eq!(response.id, household.id().to_string());
        assert_eq!(response.move_date, "2025-06-10");
        assert_eq!(response.members.len(), 1);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"move_date\":\"2025-06-10\""));
        assert!(!json.contains("new_address"));
    }
}
