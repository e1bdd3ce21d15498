//! Company use cases.
//!
//! Reads here always carry the company type. Writes check that the
//! referenced company type exists before anything is staged.

use crate::domain::{Company, CompanyType};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::types::SelectOption;

use super::crud;

pub struct CompanyService<'a> {
    uow: &'a dyn UnitOfWork,
}

impl<'a> CompanyService<'a> {
    pub fn new(uow: &'a dyn UnitOfWork) -> Self {
        Self { uow }
    }

    /// All companies with their type. Not found when there are none.
    pub async fn list(&self) -> AppResult<Vec<Company>> {
        crud::non_empty(self.uow.companies().list_all().await?)
    }

    /// Companies of one type. Not found when there are none.
    pub async fn list_by_type(&self, company_type_id: i32) -> AppResult<Vec<Company>> {
        crud::non_empty(self.uow.companies().list_by_type(company_type_id).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Company> {
        self.uow.companies().get_by_id(id).await?.ok_or_not_found()
    }

    pub async fn create(&self, company: Company) -> AppResult<Company> {
        crud::ensure_reference::<CompanyType, _>(self.uow.company_types(), company.company_type_id)
            .await?;
        crud::create(self.uow, self.uow.companies(), company.detached()).await
    }

    pub async fn update(&self, id: i32, company: Company) -> AppResult<Company> {
        crud::ensure_same_id(id, company.id)?;
        crud::ensure_reference::<CompanyType, _>(self.uow.company_types(), company.company_type_id)
            .await?;
        crud::update(self.uow, self.uow.companies(), company.detached()).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Company> {
        crud::delete::<Company, _>(self.uow, self.uow.companies(), id).await
    }

    /// Company types as a select list, ordered by id
    pub async fn type_options(&self) -> AppResult<Vec<SelectOption>> {
        let mut types = self.uow.company_types().list().await?;
        types.sort_by_key(|t| t.id);

        Ok(types
            .into_iter()
            .map(|t| SelectOption::new(t.id, t.name))
            .collect())
    }
}
