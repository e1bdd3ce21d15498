//! Unit of Work pattern implementation.
//!
//! One unit of work owns one change-set. Every repository it hands out
//! stages writes into that change-set, and `save_changes` commits them
//! together in a single transaction.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    CompanyRepository, CompanyTypeRepository, Session, Store, UserProfileRepository,
    UserRepository,
};
use crate::domain::{Company, CompanyType, User, UserProfile};
use crate::errors::AppResult;

/// Unit of Work trait for dependency injection.
///
/// Reads through any repository observe committed state only. Writes become
/// visible once `save_changes` returns.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn company_types(&self) -> &dyn CompanyTypeRepository;

    fn user_profiles(&self) -> &dyn UserProfileRepository;

    fn companies(&self) -> &dyn CompanyRepository;

    fn users(&self) -> &dyn UserRepository;

    /// Commit every staged write in staging order.
    ///
    /// Returns `true` when at least one row was affected and `false` when
    /// nothing was staged. Store errors are returned unchanged after the
    /// transaction is rolled back. The change-set is empty afterwards in
    /// both cases.
    async fn save_changes(&self) -> AppResult<bool>;

    /// Release the unit of work, dropping anything still staged.
    ///
    /// Returns the number of writes that were discarded.
    async fn close(self: Box<Self>) -> usize;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    session: Arc<Session>,
    company_types: Store<CompanyType>,
    user_profiles: Store<UserProfile>,
    companies: Store<Company>,
    users: Store<User>,
}

impl Persistence {
    /// Open a fresh change-set over `db`
    pub fn new(db: DatabaseConnection) -> Self {
        let session = Arc::new(Session::new(db));
        Self {
            company_types: Store::new(session.clone()),
            user_profiles: Store::new(session.clone()),
            companies: Store::new(session.clone()),
            users: Store::new(session.clone()),
            session,
        }
    }

    /// Number of writes waiting for `save_changes`
    pub async fn pending_writes(&self) -> usize {
        self.session.pending().await
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn company_types(&self) -> &dyn CompanyTypeRepository {
        &self.company_types
    }

    fn user_profiles(&self) -> &dyn UserProfileRepository {
        &self.user_profiles
    }

    fn companies(&self) -> &dyn CompanyRepository {
        &self.companies
    }

    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    async fn save_changes(&self) -> AppResult<bool> {
        Ok(self.session.flush().await?)
    }

    async fn close(self: Box<Self>) -> usize {
        self.session.discard().await
    }
}

/// Run a block against a unit of work borrowed for the duration of the call.
///
/// Usage:
/// ```ignore
/// let company = with_unit_of_work!(state, |uow| {
///     CompanyService::new(uow).get(id).await
/// })?;
/// ```
#[macro_export]
macro_rules! with_unit_of_work {
    ($state:expr, |$uow:ident| $body:expr) => {
        $state
            .with_unit_of_work(|$uow| Box::pin(async move { $body }))
            .await
    };
}
