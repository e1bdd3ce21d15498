//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    company_handler, company_type_handler, user_handler, user_profile_handler,
};
use crate::domain::{Company, CompanyType, FieldError, User, UserProfile};
use crate::types::{SelectOption, UserOptions};

/// OpenAPI documentation for the Company Manager API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Company Manager",
        version = "0.1.0",
        description = "Manage companies, company types, user profiles and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Company types
        company_type_handler::list_company_types,
        company_type_handler::get_company_type,
        company_type_handler::create_company_type,
        company_type_handler::update_company_type,
        company_type_handler::delete_company_type,
        // User profiles
        user_profile_handler::list_user_profiles,
        user_profile_handler::get_user_profile,
        user_profile_handler::create_user_profile,
        user_profile_handler::update_user_profile,
        user_profile_handler::delete_user_profile,
        // Companies
        company_handler::list_companies,
        company_handler::list_companies_by_type,
        company_handler::company_type_options,
        company_handler::get_company,
        company_handler::create_company,
        company_handler::update_company,
        company_handler::delete_company,
        // Users
        user_handler::list_users,
        user_handler::list_users_by_company,
        user_handler::list_users_by_profile,
        user_handler::tax_id_exists,
        user_handler::user_options,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            CompanyType,
            UserProfile,
            Company,
            User,
            SelectOption,
            UserOptions,
            FieldError,
        )
    ),
    tags(
        (name = "Company Types", description = "Company type catalogue"),
        (name = "User Profiles", description = "User profile catalogue"),
        (name = "Companies", description = "Company registration"),
        (name = "Users", description = "User registration")
    )
)]
pub struct ApiDoc;
