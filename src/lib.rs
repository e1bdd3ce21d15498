//! Company Manager - CRUD API for companies, company types, user profiles
//! and users.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities and their validation rules
//! - **services**: Use cases run against one unit of work
//! - **infra**: Database, migrations, repositories and the unit of work
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Company, CompanyType, User, UserProfile};
pub use errors::{AppError, AppResult};
pub use infra::{Database, Persistence, UnitOfWork};
