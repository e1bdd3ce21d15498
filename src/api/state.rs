//! Application state shared by every handler.
//!
//! Holds the pooled database connection and opens one unit of work per
//! request on top of it.

use futures::future::BoxFuture;
use std::sync::Arc;

use crate::errors::AppResult;
use crate::infra::{Database, Persistence, UnitOfWork};

#[derive(Clone)]
pub struct AppState {
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Open a unit of work with an empty change-set.
    pub fn begin_unit_of_work(&self) -> Box<dyn UnitOfWork> {
        Box::new(Persistence::new(self.database.get_connection()))
    }

    /// Run `f` against a fresh unit of work and close it afterwards,
    /// whether `f` succeeded or not.
    pub async fn with_unit_of_work<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a dyn UnitOfWork) -> BoxFuture<'a, AppResult<T>> + Send,
        T: Send,
    {
        let uow = self.begin_unit_of_work();
        let result = f(uow.as_ref()).await;

        let discarded = uow.close().await;
        if discarded > 0 {
            tracing::debug!(discarded, "Unit of work closed with uncommitted writes");
        }

        result
    }
}
