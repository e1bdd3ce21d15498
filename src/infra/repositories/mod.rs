//! Repository layer - Data access abstraction
//!
//! One generic `Store<T>` provides CRUD for every record type. The
//! per-entity traits add relationship-aware reads on top of it.

mod base;
mod company_repository;
mod company_type_repository;
pub(crate) mod entities;
mod session;
mod user_repository;

pub use base::{Identity, Pending, Record, Repository, Store};
pub use company_repository::CompanyRepository;
pub use company_type_repository::{CompanyTypeRepository, UserProfileRepository};
pub use session::Session;
pub use user_repository::UserRepository;
