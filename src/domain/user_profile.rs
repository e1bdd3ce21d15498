//! User profile entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A role-like profile a user is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Store-assigned identity (ignored on create)
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(min = 3, max = 100, message = "Name must be between 3 and 100 characters"))]
    #[schema(example = "Manager")]
    pub name: String,
}

impl UserProfile {
    /// Create a profile that has not been stored yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate_fields;

    #[test]
    fn test_profile_name_rules() {
        assert!(validate_fields(&UserProfile::new("Manager")).is_ok());
        assert!(validate_fields(&UserProfile::new("")).unwrap_err().contains("name"));
    }
}
