//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::domain::{validate_fields, FieldErrors};
use crate::errors::AppError;

/// JSON body that has passed the entity's declared rules.
///
/// Malformed bodies are reported against the `body` field; rule violations
/// are reported field by field.
///
/// ```rust,ignore
/// async fn create(ValidatedJson(company): ValidatedJson<Company>) {
///     // company.trade_name is already 3..=100 characters
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(FieldErrors::single("body", e.body_text())))?;

        validate_fields(&value)?;

        Ok(ValidatedJson(value))
    }
}
