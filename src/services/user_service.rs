//! User use cases.
//!
//! Tax ids are unique per company. Creating a user whose tax id is already
//! registered under the same company is a conflict.

use crate::domain::{Company, User, UserProfile};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::{SelectOption, UserOptions};

use super::crud;

pub struct UserService<'a> {
    uow: &'a dyn UnitOfWork,
}

impl<'a> UserService<'a> {
    pub fn new(uow: &'a dyn UnitOfWork) -> Self {
        Self { uow }
    }

    /// All users with profile and company. Not found when there are none.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        crud::non_empty(self.uow.users().list_all().await?)
    }

    pub async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<User>> {
        crud::non_empty(self.uow.users().list_by_company(company_id).await?)
    }

    pub async fn list_by_profile(&self, user_profile_id: i32) -> AppResult<Vec<User>> {
        crud::non_empty(self.uow.users().list_by_profile(user_profile_id).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.uow.users().get_by_id(id).await?.ok_or_not_found()
    }

    pub async fn tax_id_exists(&self, tax_id: &str, company_id: i32) -> AppResult<bool> {
        self.uow.users().tax_id_exists(tax_id, company_id).await
    }

    pub async fn create(&self, user: User) -> AppResult<User> {
        if self.tax_id_exists(&user.tax_id, user.company_id).await? {
            tracing::debug!(company_id = user.company_id, "Rejected duplicate tax id");
            return Err(AppError::conflict("Tax id"));
        }
        self.ensure_references(&user).await?;
        crud::create(self.uow, self.uow.users(), user.detached()).await
    }

    pub async fn update(&self, id: i32, user: User) -> AppResult<User> {
        crud::ensure_same_id(id, user.id)?;
        self.ensure_references(&user).await?;
        crud::update(self.uow, self.uow.users(), user.detached()).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<User> {
        crud::delete::<User, _>(self.uow, self.uow.users(), id).await
    }

    /// Profiles and companies as select lists, each ordered by id
    pub async fn options(&self) -> AppResult<UserOptions> {
        let mut profiles = self.uow.user_profiles().list().await?;
        let mut companies = self.uow.companies().list().await?;
        profiles.sort_by_key(|p| p.id);
        companies.sort_by_key(|c| c.id);

        Ok(UserOptions {
            profiles: profiles
                .into_iter()
                .map(|p| SelectOption::new(p.id, p.name))
                .collect(),
            companies: companies
                .into_iter()
                .map(|c| SelectOption::new(c.id, c.trade_name))
                .collect(),
        })
    }

    async fn ensure_references(&self, user: &User) -> AppResult<()> {
        crud::ensure_reference::<UserProfile, _>(self.uow.user_profiles(), user.user_profile_id)
            .await?;
        crud::ensure_reference::<Company, _>(self.uow.companies(), user.company_id).await
    }
}
