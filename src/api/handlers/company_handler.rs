//! Company handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::Company;
use crate::errors::AppResult;
use crate::services::CompanyService;
use crate::types::{Created, SelectOption};
use crate::with_unit_of_work;

/// Create company routes
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route("/type-options", get(company_type_options))
        .route("/by-type/:company_type_id", get(list_companies_by_type))
        .route(
            "/:id",
            get(get_company).put(update_company).delete(delete_company),
        )
}

/// List all companies with their company type
#[utoipa::path(
    get,
    path = "/api/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "All companies", body = Vec<Company>),
        (status = 404, description = "No companies registered")
    )
)]
pub async fn list_companies(State(state): State<AppState>) -> AppResult<Json<Vec<Company>>> {
    let companies = with_unit_of_work!(state, |uow| CompanyService::new(uow).list().await)?;
    Ok(Json(companies))
}

/// List the companies of one company type
#[utoipa::path(
    get,
    path = "/api/companies/by-type/{company_type_id}",
    tag = "Companies",
    params(("company_type_id" = i32, Path, description = "Company type ID")),
    responses(
        (status = 200, description = "Companies of the type", body = Vec<Company>),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "No companies of this type")
    )
)]
pub async fn list_companies_by_type(
    State(state): State<AppState>,
    Path(company_type_id): Path<i32>,
) -> AppResult<Json<Vec<Company>>> {
    let companies = with_unit_of_work!(state, |uow| {
        CompanyService::new(uow).list_by_type(company_type_id).await
    })?;
    Ok(Json(companies))
}

/// Company types as a select list
#[utoipa::path(
    get,
    path = "/api/companies/type-options",
    tag = "Companies",
    responses(
        (status = 200, description = "Company type options ordered by id", body = Vec<SelectOption>)
    )
)]
pub async fn company_type_options(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SelectOption>>> {
    let options = with_unit_of_work!(state, |uow| {
        CompanyService::new(uow).type_options().await
    })?;
    Ok(Json(options))
}

/// Get a company by ID with its company type
#[utoipa::path(
    get,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Company found", body = Company),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Company>> {
    let company = with_unit_of_work!(state, |uow| CompanyService::new(uow).get(id).await)?;
    Ok(Json(company))
}

/// Create a company
#[utoipa::path(
    post,
    path = "/api/companies",
    tag = "Companies",
    request_body = Company,
    responses(
        (status = 201, description = "Company created", body = Company),
        (status = 400, description = "Validation error or unknown company type")
    )
)]
pub async fn create_company(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Company>,
) -> AppResult<Created<Company>> {
    let created = with_unit_of_work!(state, |uow| {
        CompanyService::new(uow).create(payload).await
    })?;
    Ok(Created(created))
}

/// Replace a company
#[utoipa::path(
    put,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    request_body = Company,
    responses(
        (status = 200, description = "Company updated", body = Company),
        (status = 400, description = "Validation error, ID mismatch or unknown company type"),
        (status = 404, description = "Company not found")
    )
)]
pub async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<Company>,
) -> AppResult<Json<Company>> {
    let updated = with_unit_of_work!(state, |uow| {
        CompanyService::new(uow).update(id, payload).await
    })?;
    Ok(Json(updated))
}

/// Delete a company
#[utoipa::path(
    delete,
    path = "/api/companies/{id}",
    tag = "Companies",
    params(("id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Deleted company", body = Company),
        (status = 404, description = "Company not found"),
        (status = 409, description = "Company still referenced by users")
    )
)]
pub async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Company>> {
    let deleted = with_unit_of_work!(state, |uow| CompanyService::new(uow).delete(id).await)?;
    Ok(Json(deleted))
}
