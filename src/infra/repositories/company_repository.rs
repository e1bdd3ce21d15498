//! Company repository with eager-loaded company types.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, LoaderTrait, QueryFilter, Select};

use super::base::{ensure_identity, Record, Repository, Store};
use super::entities::{company, company_type};
use crate::domain::{Company, CompanyType};
use crate::errors::AppResult;

/// Company queries that also load each company's type.
#[async_trait]
pub trait CompanyRepository: Repository<Company> {
    /// All companies with their company type
    async fn list_all(&self) -> AppResult<Vec<Company>>;

    /// Companies of one type, empty when none match
    async fn list_by_type(&self, company_type_id: i32) -> AppResult<Vec<Company>>;

    /// One company with its company type
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Company>>;
}

impl Store<Company> {
    async fn fetch_with_type(&self, select: Select<company::Entity>) -> AppResult<Vec<Company>> {
        let models = select.all(self.db()).await?;
        let types = models.load_one(company_type::Entity, self.db()).await?;

        Ok(models
            .into_iter()
            .zip(types)
            .map(|(model, company_type)| Company {
                company_type: company_type.map(CompanyType::from),
                ..Company::from(model)
            })
            .collect())
    }
}

#[async_trait]
impl CompanyRepository for Store<Company> {
    async fn list_all(&self) -> AppResult<Vec<Company>> {
        self.fetch_with_type(company::Entity::find()).await
    }

    async fn list_by_type(&self, company_type_id: i32) -> AppResult<Vec<Company>> {
        let company_type_id = ensure_identity(CompanyType::KIND, company_type_id)?;
        self.fetch_with_type(
            company::Entity::find().filter(company::Column::CompanyTypeId.eq(company_type_id)),
        )
        .await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Company>> {
        let id = ensure_identity(Company::KIND, id)?;
        let found = company::Entity::find_by_id(id)
            .find_also_related(company_type::Entity)
            .one(self.db())
            .await?;

        Ok(found.map(|(model, company_type)| Company {
            company_type: company_type.map(CompanyType::from),
            ..Company::from(model)
        }))
    }
}
