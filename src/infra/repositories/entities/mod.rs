//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod company;
pub mod company_type;
pub mod user;
pub mod user_profile;

