//! User profile handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::UserProfile;
use crate::errors::AppResult;
use crate::services::UserProfileService;
use crate::types::Created;
use crate::with_unit_of_work;

/// Create user profile routes
pub fn user_profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_user_profiles).post(create_user_profile))
        .route(
            "/:id",
            get(get_user_profile)
                .put(update_user_profile)
                .delete(delete_user_profile),
        )
}

/// List all user profiles
#[utoipa::path(
    get,
    path = "/api/user-profiles",
    tag = "User Profiles",
    responses(
        (status = 200, description = "All user profiles", body = Vec<UserProfile>)
    )
)]
pub async fn list_user_profiles(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserProfile>>> {
    let profiles = with_unit_of_work!(state, |uow| UserProfileService::new(uow).list().await)?;
    Ok(Json(profiles))
}

/// Get a user profile by ID
#[utoipa::path(
    get,
    path = "/api/user-profiles/{id}",
    tag = "User Profiles",
    params(("id" = i32, Path, description = "User profile ID")),
    responses(
        (status = 200, description = "User profile found", body = UserProfile),
        (status = 400, description = "Invalid ID"),
        (status = 404, description = "User profile not found")
    )
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let profile = with_unit_of_work!(state, |uow| UserProfileService::new(uow).get(id).await)?;
    Ok(Json(profile))
}

/// Create a user profile
#[utoipa::path(
    post,
    path = "/api/user-profiles",
    tag = "User Profiles",
    request_body = UserProfile,
    responses(
        (status = 201, description = "User profile created", body = UserProfile),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user_profile(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserProfile>,
) -> AppResult<Created<UserProfile>> {
    let created = with_unit_of_work!(state, |uow| {
        UserProfileService::new(uow).create(payload).await
    })?;
    Ok(Created(created))
}

/// Replace a user profile
#[utoipa::path(
    put,
    path = "/api/user-profiles/{id}",
    tag = "User Profiles",
    params(("id" = i32, Path, description = "User profile ID")),
    request_body = UserProfile,
    responses(
        (status = 200, description = "User profile updated", body = UserProfile),
        (status = 400, description = "Validation error or ID mismatch"),
        (status = 404, description = "User profile not found")
    )
)]
pub async fn update_user_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UserProfile>,
) -> AppResult<Json<UserProfile>> {
    let updated = with_unit_of_work!(state, |uow| {
        UserProfileService::new(uow).update(id, payload).await
    })?;
    Ok(Json(updated))
}

/// Delete a user profile
#[utoipa::path(
    delete,
    path = "/api/user-profiles/{id}",
    tag = "User Profiles",
    params(("id" = i32, Path, description = "User profile ID")),
    responses(
        (status = 200, description = "Deleted user profile", body = UserProfile),
        (status = 404, description = "User profile not found"),
        (status = 409, description = "User profile still referenced by users")
    )
)]
pub async fn delete_user_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<UserProfile>> {
    let deleted = with_unit_of_work!(state, |uow| UserProfileService::new(uow).delete(id).await)?;
    Ok(Json(deleted))
}
