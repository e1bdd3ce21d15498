//! Domain layer - Core business entities
//!
//! This module contains the four records the application manages and the
//! field-level rules each of them must satisfy before it reaches a
//! repository. Relationship fields are plain optional snapshots; they are
//! only filled in by reads that eager-load them.

pub mod company;
pub mod company_type;
pub mod user;
pub mod user_profile;
pub mod validation;

pub use company::Company;
pub use company_type::CompanyType;
pub use user::User;
pub use user_profile::UserProfile;
pub use validation::{validate_fields, FieldError, FieldErrors};
