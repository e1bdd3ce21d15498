//! User handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;
use crate::services::UserService;
use crate::types::{Created, UserOptions};
use crate::with_unit_of_work;

/// Query for the tax id availability check
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TaxIdQuery {
    /// Formatted tax id to look up
    pub tax_id: String,
    /// Company the tax id must be unique in
    pub company_id: i32,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/options", get(user_options))
        .route("/tax-id-exists", get(tax_id_exists))
        .route("/by-company/:company_id", get(list_users_by_company))
        .route("/by-profile/:user_profile_id", get(list_users_by_profile))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users with profile and company
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 404, description = "No users registered")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = with_unit_of_work!(state, |uow| UserService::new(uow).list().await)?;
    Ok(Json(users))
}

/// List the users of one company
#[utoipa::path(
    get,
    path = "/api/users/by-company/{company_id}",
    tag = "Users",
    params(("company_id" = i32, Path, description = "Company ID")),
    responses(
        (status = 200, description = "Users of the company", body = Vec<User>),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "No users in this company")
    )
)]
pub async fn list_users_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<i32>,
) -> AppResult<Json<Vec<User>>> {
    let users = with_unit_of_work!(state, |uow| {
        UserService::new(uow).list_by_company(company_id).await
    })?;
    Ok(Json(users))
}

/// List the users holding one profile
#[utoipa::path(
    get,
    path = "/api/users/by-profile/{user_profile_id}",
    tag = "Users",
    params(("user_profile_id" = i32, Path, description = "User profile ID")),
    responses(
        (status = 200, description = "Users with the profile", body = Vec<User>),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "No users with this profile")
    )
)]
pub async fn list_users_by_profile(
    State(state): State<AppState>,
    Path(user_profile_id): Path<i32>,
) -> AppResult<Json<Vec<User>>> {
    let users = with_unit_of_work!(state, |uow| {
        UserService::new(uow).list_by_profile(user_profile_id).await
    })?;
    Ok(Json(users))
}

/// Check whether a tax id is already registered in a company
///
/// Answers `409 true` when taken and `200 false` when free.
#[utoipa::path(
    get,
    path = "/api/users/tax-id-exists",
    tag = "Users",
    params(TaxIdQuery),
    responses(
        (status = 200, description = "Tax id is free", body = bool),
        (status = 409, description = "Tax id already registered in the company", body = bool)
    )
)]
pub async fn tax_id_exists(
    State(state): State<AppState>,
    Query(query): Query<TaxIdQuery>,
) -> AppResult<(StatusCode, Json<bool>)> {
    let exists = with_unit_of_work!(state, |uow| {
        UserService::new(uow)
            .tax_id_exists(&query.tax_id, query.company_id)
            .await
    })?;

    let status = if exists {
        StatusCode::CONFLICT
    } else {
        StatusCode::OK
    };
    Ok((status, Json(exists)))
}

/// Profiles and companies as select lists
#[utoipa::path(
    get,
    path = "/api/users/options",
    tag = "Users",
    responses(
        (status = 200, description = "Profile and company options", body = UserOptions)
    )
)]
pub async fn user_options(State(state): State<AppState>) -> AppResult<Json<UserOptions>> {
    let options = with_unit_of_work!(state, |uow| UserService::new(uow).options().await)?;
    Ok(Json(options))
}

/// Get a user by ID with profile and company
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> AppResult<Json<User>> {
    let user = with_unit_of_work!(state, |uow| UserService::new(uow).get(id).await)?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error or unknown profile/company"),
        (status = 409, description = "Tax id already registered in the company")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<User>,
) -> AppResult<Created<User>> {
    let created = with_unit_of_work!(state, |uow| UserService::new(uow).create(payload).await)?;
    Ok(Created(created))
}

/// Replace a user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error, ID mismatch or unknown profile/company"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<User>,
) -> AppResult<Json<User>> {
    let updated = with_unit_of_work!(state, |uow| {
        UserService::new(uow).update(id, payload).await
    })?;
    Ok(Json(updated))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    let deleted = with_unit_of_work!(state, |uow| UserService::new(uow).delete(id).await)?;
    Ok(Json(deleted))
}
