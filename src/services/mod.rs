//! Application services layer - Use cases and business logic.
//!
//! Services borrow the unit of work of the current request. They run the
//! checks that sit in front of the repositories (existence, references,
//! path/body agreement) and decide when to commit.

mod company_service;
mod company_type_service;
pub(crate) mod crud;
mod user_profile_service;
mod user_service;

pub use company_service::CompanyService;
pub use company_type_service::CompanyTypeService;
pub use user_profile_service::UserProfileService;
pub use user_service::UserService;
