//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over the shared change-set
//! - Unit of Work for committing staged writes

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CompanyRepository, CompanyTypeRepository, Pending, Record, Repository, Session, Store,
    UserProfileRepository, UserRepository,
};
pub use unit_of_work::{Persistence, UnitOfWork};
