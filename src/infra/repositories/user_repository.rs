//! User repository with eager-loaded profiles and companies.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, LoaderTrait, PaginatorTrait, QueryFilter, Select};

use super::base::{ensure_identity, Record, Repository, Store};
use super::entities::{company, user, user_profile};
use crate::domain::{Company, User, UserProfile};
use crate::errors::AppResult;

/// User queries. Every read here loads the user's profile and company.
#[async_trait]
pub trait UserRepository: Repository<User> {
    async fn list_all(&self) -> AppResult<Vec<User>>;

    async fn get_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Users registered under one company
    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<User>>;

    /// Users holding one profile
    async fn list_by_profile(&self, user_profile_id: i32) -> AppResult<Vec<User>>;

    /// Whether `tax_id` is already taken inside `company_id`.
    ///
    /// The same tax id under another company does not count.
    async fn tax_id_exists(&self, tax_id: &str, company_id: i32) -> AppResult<bool>;
}

impl Store<User> {
    async fn fetch_with_relations(&self, select: Select<user::Entity>) -> AppResult<Vec<User>> {
        let models = select.all(self.db()).await?;
        let profiles = models.load_one(user_profile::Entity, self.db()).await?;
        let companies = models.load_one(company::Entity, self.db()).await?;

        Ok(models
            .into_iter()
            .zip(profiles)
            .zip(companies)
            .map(|((model, profile), company)| User {
                user_profile: profile.map(UserProfile::from),
                company: company.map(Company::from),
                ..User::from(model)
            })
            .collect())
    }
}

#[async_trait]
impl UserRepository for Store<User> {
    async fn list_all(&self) -> AppResult<Vec<User>> {
        self.fetch_with_relations(user::Entity::find()).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let id = ensure_identity(User::KIND, id)?;
        let mut found = self
            .fetch_with_relations(user::Entity::find_by_id(id))
            .await?;

        Ok(found.pop())
    }

    async fn list_by_company(&self, company_id: i32) -> AppResult<Vec<User>> {
        let company_id = ensure_identity(Company::KIND, company_id)?;
        self.fetch_with_relations(
            user::Entity::find().filter(user::Column::CompanyId.eq(company_id)),
        )
        .await
    }

    async fn list_by_profile(&self, user_profile_id: i32) -> AppResult<Vec<User>> {
        let user_profile_id = ensure_identity(UserProfile::KIND, user_profile_id)?;
        self.fetch_with_relations(
            user::Entity::find().filter(user::Column::UserProfileId.eq(user_profile_id)),
        )
        .await
    }

    async fn tax_id_exists(&self, tax_id: &str, company_id: i32) -> AppResult<bool> {
        let matches = user::Entity::find()
            .filter(user::Column::TaxId.eq(tax_id))
            .filter(user::Column::CompanyId.eq(company_id))
            .count(self.db())
            .await?;

        Ok(matches > 0)
    }
}
