//! Structured field validation.
//!
//! Entities declare their rules with `validator` derives; this module turns
//! the derive output into an ordered list of `{field, message}` pairs that
//! the API returns as-is.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// A single rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Field name as it appears in the entity
    #[schema(example = "tradeName")]
    pub field: String,
    /// Human readable reason
    #[schema(example = "Trade name must be between 3 and 100 characters")]
    pub message: String,
}

/// Every violation found on one entity, sorted by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Build an error set holding one violation.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }])
    }

    /// Check whether a given field has at least one violation.
    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn to_vec(&self) -> Vec<FieldError> {
        self.0.clone()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut list: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = to_camel_case(&field.to_string());
                errs.iter().map(move |e| FieldError {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();

        list.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        Self(list)
    }
}

/// Run an entity's declared rules.
pub fn validate_fields<T: Validate>(entity: &T) -> Result<(), FieldErrors> {
    entity.validate().map_err(|e| FieldErrors::from(&e))
}

// Rust field names are snake_case, the wire format is camelCase.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_field_names() {
        assert_eq!(to_camel_case("trade_name"), "tradeName");
        assert_eq!(to_camel_case("company_type_id"), "companyTypeId");
        assert_eq!(to_camel_case("name"), "name");
    }

    #[test]
    fn test_display_joins_errors() {
        let errors = FieldErrors::single("name", "Name is required");
        assert_eq!(errors.to_string(), "name: Name is required");
        assert_eq!(errors.to_vec().len(), 1);
        assert!(errors.contains("name"));
    }
}
