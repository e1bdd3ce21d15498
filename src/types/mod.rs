//! Shared types used across services and handlers.

mod options;
mod response;

pub use options::{SelectOption, UserOptions};
pub use response::Created;
