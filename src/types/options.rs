use serde::Serialize;
use utoipa::ToSchema;

/// One entry of a front-end select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SelectOption {
    /// Label shown to the user
    #[schema(example = "Retail")]
    pub text: String,
    /// Record id, as a string
    #[schema(example = "1")]
    pub value: String,
}

impl SelectOption {
    pub fn new(id: i32, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: id.to_string(),
        }
    }
}

/// Select lists needed by the user form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserOptions {
    pub profiles: Vec<SelectOption>,
    pub companies: Vec<SelectOption>,
}
