//! Company type entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A category companies are filed under (e.g. "Retail").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyType {
    /// Store-assigned identity (ignored on create)
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    #[validate(length(
        min = 3,
        max = 100,
        message = "Company type name must be between 3 and 100 characters"
    ))]
    #[schema(example = "Retail")]
    pub name: String,
}

impl CompanyType {
    /// Create a company type that has not been stored yet
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
    fn test_valid_company_type() {
        assert!(validate_fields(&CompanyType::new("Retail")).is_ok());
    }

    #[test]
    fn test_name_length_bounds() {
        let errors = validate_fields(&CompanyType::new("ab")).unwrap_err();
        assert!(errors.contains("name"));

        assert!(validate_fields(&CompanyType::new("x".repeat(100))).is_ok());
        assert!(validate_fields(&CompanyType::new("x".repeat(101))).is_err());
    }

    #[test]
    fn test_id_defaults_when_missing() {
        let parsed: CompanyType = serde_json::from_str(r#"{"name":"Retail"}"#).unwrap();
        assert_eq!(parsed.id, 0);
        assert_eq!(parsed.name, "Retail");
    }
}
