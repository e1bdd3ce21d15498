//! HTTP request handlers.

pub mod company_handler;
pub mod company_type_handler;
pub mod user_handler;
pub mod user_profile_handler;

pub use company_handler::company_routes;
pub use company_type_handler::company_type_routes;
pub use user_handler::user_routes;
pub use user_profile_handler::user_profile_routes;
