//! Company entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::CompanyType;

/// A registered company.
///
/// `company_type` is only present when the read that produced this value
/// eager-loaded it. It is never read from request bodies and is left out of
/// the JSON output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Store-assigned identity (ignored on create)
    #[serde(default)]
    #[schema(example = 1)]
    pub id: i32,
    #[validate(length(
        min = 3,
        max = 100,
        message = "Trade name must be between 3 and 100 characters"
    ))]
    #[schema(example = "Acme")]
    pub trade_name: String,
    #[validate(length(
        min = 3,
        max = 150,
        message = "Legal name must be between 3 and 150 characters"
    ))]
    #[schema(example = "Acme Ltd")]
    pub legal_name: String,
    /// Formatted CNPJ, e.g. `12.345.678/0001-99`
    #[validate(length(equal = 18, message = "Tax id must have exactly 18 characters"))]
    #[schema(example = "12.345.678/0001-99")]
    pub tax_id: String,
    #[validate(length(
        min = 5,
        max = 200,
        message = "Address must be between 5 and 200 characters"
    ))]
    #[schema(example = "123 Main St")]
    pub address: String,
    #[validate(range(min = 1, message = "Company type is required"))]
    #[schema(example = 1)]
    pub company_type_id: i32,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    #[schema(read_only)]
    pub company_type: Option<CompanyType>,
}

impl Company {
    /// Create a company that has not been stored yet
    pub fn new(
        trade_name: impl Into<String>,
        legal_name: impl Into<String>,
        tax_id: impl Into<String>,
        address: impl Into<String>,
        company_type_id: i32,
    ) -> Self {
        Self {
            id: 0,
            trade_name: trade_name.into(),
            legal_name: legal_name.into(),
            tax_id: tax_id.into(),
            address: address.into(),
            company_type_id,
            company_type: None,
        }
    }

    /// Drop any eager-loaded association, leaving only the stored columns
    pub fn detached(mut self) -> Self {
        self.company_type = None;
        self
    }
}
