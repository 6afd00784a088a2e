//! Household member value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A person belonging to a household's move.
///
/// The email address is the natural key for duplicate detection
/// across households and is compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    name: String,
    email: String,
}

impl Member {
    /// Creates a new member.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if name or email is empty after trimming.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        let email = email.into().trim().to_string();

        if name.is_empty() {
            return Err(ValidationError::empty_field("member.name"));
        }
        if email.is_empty() {
            return Err(ValidationError::empty_field("member.email"));
        }

        Ok(Self { name, email })
    }

    /// Returns the member's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the member's email as entered.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the email lowercased, the key used for duplicate detection.
    pub fn normalized_email(&self) -> String {
        self.email.to_lowercase()
    }
}
