//! User entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{Company, UserProfile};

/// A person registered under one company with one profile.
///
/// Tax ids are unique per company, not globally. That rule is checked by the
/// service layer before a user is created; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned identity (ignored on create)
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 5, max = 100, message = "Name must be between 5 and 100 characters"))]
    #[schema(example = "Maria Silva")]
    pub name: String,
    /// Formatted CPF, e.g. `111.111.111-11`
    #[validate(length(equal = 14, message = "Tax id must have exactly 14 characters"))]
    #[schema(example = "111.111.111-11")]
    pub tax_id: String,
    #[validate(range(min = 1, message = "User profile is required"))]
    #[schema(example = 1)]
    pub user_profile_id: i32,
    #[validate(range(min = 1, message = "Company is required"))]
    #[schema(example = 1)]
    pub company_id: i32,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub user_profile: Option<UserProfile>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub company: Option<Company>,
}

impl User {
    /// Create a user that has not been stored yet
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        user_profile_id: i32,
        company_id: i32,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            tax_id: tax_id.into(),
            user_profile_id,
            company_id,
            user_profile: None,
            company: None,
        }
    }

    /// Drop any eager-loaded associations, leaving only the stored columns
    pub fn detached(mut self) -> Self {
        self.user_profile = None;
        self.company = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_fields;

    #[test]
    fn test_valid_user() {
        assert!(validate_fields(&User::new("Maria Silva", "111.111.111-11", 1, 1)).is_ok());
    }

    #[test]
    fn test_name_minimum_is_five() {
        let errors = validate_fields(&User::new("Ana", "111.111.111-11", 1, 1)).unwrap_err();
        assert!(errors.contains("name"));
    }

    #[test]
    fn test_missing_foreign_keys() {
        let errors =
            validate_fields(&User::new("Maria Silva", "111.111.111-11", 0, 0)).unwrap_err();
        assert!(errors.contains("userProfileId"));
        assert!(errors.contains("companyId"));
        assert!(!errors.contains("taxId"));
    }
}
