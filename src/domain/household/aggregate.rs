//! Household aggregate entity.
//!
//! A household describes one planned residential move: who is moving,
//! when, and between which addresses. Households are the sole input to
//! the overlap analyzer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, HouseholdId, MoveDate, Timestamp, UserId, ValidationError,
};

use super::Member;

/// Maximum length for household name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Household aggregate - one planned residential move.
///
/// # Invariants
///
/// - `name` is 1-200 characters, non-empty after trimming
/// - `household_size` is at least 1
/// - Addresses are free text; absence means "unknown", never a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    /// Unique identifier for this household.
    id: HouseholdId,

    /// User who owns this household record.
    user_id: UserId,

    /// Display name, e.g. "Familie Schmidt".
    name: String,

    /// The planned move date (day granularity).
    move_date: MoveDate,

    /// Number of people moving.
    household_size: u32,

    /// Address being vacated, if known.
    old_address: Option<String>,

    /// Address being moved into, if known.
    new_address: Option<String>,

    /// People belonging to this move.
    members: Vec<Member>,

    /// When the record was created.
    created_at: Timestamp,

    /// When the record was last updated.
    updated_at: Timestamp,
}

impl Household {
    /// Create a new household record.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty or too long
    /// - `OutOfRange` if `household_size` is zero
    pub fn new(
        id: HouseholdId,
        user_id: UserId,
        name: String,
        move_date: MoveDate,
        household_size: u32,
        old_address: Option<String>,
        new_address: Option<String>,
        members: Vec<Member>,
    ) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;
        Self::validate_size(household_size)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            user_id,
            name,
            move_date,
            household_size,
            old_address: normalize_optional(old_address),
            new_address: normalize_optional(new_address),
            members,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a household from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: HouseholdId,
        user_id: UserId,
        name: String,
        move_date: MoveDate,
        household_size: u32,
        old_address: Option<String>,
        new_address: Option<String>,
        members: Vec<Member>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            name,
            move_date,
            household_size,
            old_address,
            new_address,
            members,
            created_at,
            updated_at,
        }
    }

    fn validate_name(name: String) -> Result<String, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(
                "name",
                format!("Name exceeds {} characters", MAX_NAME_LENGTH),
            ));
        }
        Ok(name)
    }

    fn validate_size(size: u32) -> Result<(), DomainError> {
        if size == 0 {
            return Err(ValidationError::out_of_range("household_size", 1, i32::MAX, 0).into());
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the household ID.
    pub fn id(&self) -> &HouseholdId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the planned move date.
    pub fn move_date(&self) -> &MoveDate {
        &self.move_date
    }

    /// Returns the number of people moving.
    pub fn household_size(&self) -> u32 {
        self.household_size
    }

    /// Returns the address being vacated, if known.
    pub fn old_address(&self) -> Option<&str> {
        self.old_address.as_deref()
    }

    /// Returns the address being moved into, if known.
    pub fn new_address(&self) -> Option<&str> {
        self.new_address.as_deref()
    }

    /// Returns the member roster.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Returns when the record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the record was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Address comparison
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the old address trimmed and case-folded for comparison,
    /// or None when unknown or blank.
    pub fn comparable_old_address(&self) -> Option<String> {
        comparable(self.old_address.as_deref())
    }

    /// Returns the new address trimmed and case-folded for comparison,
    /// or None when unknown or blank.
    pub fn comparable_new_address(&self) -> Option<String> {
        comparable(self.new_address.as_deref())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies updated fields, revalidating and bumping `updated_at`.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        name: String,
        move_date: MoveDate,
        household_size: u32,
        old_address: Option<String>,
        new_address: Option<String>,
        members: Vec<Member>,
    ) -> Result<(), DomainError> {
        let name = Self::validate_name(name)?;
        Self::validate_size(household_size)?;
        self.name = name;
        self.move_date = move_date;
        self.household_size = household_size;
        self.old_address = normalize_optional(old_address);
        self.new_address = normalize_optional(new_address);
        self.members = members;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks if the given user owns this household record.
    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can access this household.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` if the user is not the owner.
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User does not own this household",
            ))
        }
    }
}

/// Blank optional strings collapse to None so they never compare equal.
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn comparable(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}
