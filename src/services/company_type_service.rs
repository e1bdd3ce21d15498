//! Company type use cases.

use crate::domain::CompanyType;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

use super::crud;

pub struct CompanyTypeService<'a> {
    uow: &'a dyn UnitOfWork,
}

impl<'a> CompanyTypeService<'a> {
    pub fn new(uow: &'a dyn UnitOfWork) -> Self {
        Self { uow }
    }

    /// Every company type. An empty list is a valid answer here.
    pub async fn list(&self) -> AppResult<Vec<CompanyType>> {
        self.uow.company_types().list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<CompanyType> {
        self.uow.company_types().get(id).await?.ok_or_not_found()
    }

    pub async fn create(&self, company_type: CompanyType) -> AppResult<CompanyType> {
        crud::create(self.uow, self.uow.company_types(), company_type).await
    }

    pub async fn update(&self, id: i32, company_type: CompanyType) -> AppResult<CompanyType> {
        crud::ensure_same_id(id, company_type.id)?;
        crud::update(self.uow, self.uow.company_types(), company_type).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<CompanyType> {
        crud::delete::<CompanyType, _>(self.uow, self.uow.company_types(), id).await
    }
}
