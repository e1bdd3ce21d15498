//! Company type handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::CompanyType;
use crate::errors::AppResult;
use crate::services::CompanyTypeService;
use crate::types::Created;
use crate::with_unit_of_work;

/// Create company type routes
pub fn company_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_company_types).post(create_company_type))
        .route(
            "/:id",
            get(get_company_type)
                .put(update_company_type)
                .delete(delete_company_type),
        )
}

/// List all company types
#[utoipa::path(
    get,
    path = "/api/company-types",
    tag = "Company Types",
    responses(
        (status = 200, description = "All company types", body = Vec<CompanyType>)
    )
)]
pub async fn list_company_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CompanyType>>> {
    let types = with_unit_of_work!(state, |uow| CompanyTypeService::new(uow).list().await)?;
    Ok(Json(types))
}

/// Get a company type by ID
#[utoipa::path(
    get,
    path = "/api/company-types/{id}",
    tag = "Company Types",
    params(("id" = i32, Path, description = "Company type ID")),
    responses(
        (status = 200, description = "Company type found", body = CompanyType),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Company type not found")
    )
)]
pub async fn get_company_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CompanyType>> {
    let company_type = with_unit_of_work!(state, |uow| CompanyTypeService::new(uow).get(id).await)?;
    Ok(Json(company_type))
}

/// Create a company type
#[utoipa::path(
    post,
    path = "/api/company-types",
    tag = "Company Types",
    request_body = CompanyType,
    responses(
        (status = 201, description = "Company type created", body = CompanyType),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_company_type(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CompanyType>,
) -> AppResult<Created<CompanyType>> {
    let created = with_unit_of_work!(state, |uow| {
        CompanyTypeService::new(uow).create(payload).await
    })?;
    Ok(Created(created))
}

/// Replace a company type
#[utoipa::path(
    put,
    path = "/api/company-types/{id}",
    tag = "Company Types",
    params(("id" = i32, Path, description = "Company type ID")),
    request_body = CompanyType,
    responses(
        (status = 200, description = "Company type updated", body = CompanyType),
        (status = 400, description = "Validation error or ID mismatch"),
        (status = 404, description = "Company type not found")
    )
)]
pub async fn update_company_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CompanyType>,
) -> AppResult<Json<CompanyType>> {
    let updated = with_unit_of_work!(state, |uow| {
        CompanyTypeService::new(uow).update(id, payload).await
    })?;
    Ok(Json(updated))
}

/// Delete a company type
#[utoipa::path(
    delete,
    path = "/api/company-types/{id}",
    tag = "Company Types",
    params(("id" = i32, Path, description = "Company type ID")),
    responses(
        (status = 200, description = "Deleted company type", body = CompanyType),
        (status = 404, description = "Company type not found"),
        (status = 409, description = "Company type still referenced by companies")
    )
)]
pub async fn delete_company_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<CompanyType>> {
    let deleted = with_unit_of_work!(state, |uow| CompanyTypeService::new(uow).delete(id).await)?;
    Ok(Json(deleted))
}
