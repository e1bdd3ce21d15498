//! Company database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Company;
use crate::infra::repositories::base::{Identity, Record};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub trade_name: String,
    pub legal_name: String,
    pub tax_id: String,
    pub address: String,
    pub company_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company_type::Entity",
        from = "Column::CompanyTypeId",
        to = "super::company_type::Column::Id",
        on_delete = "NoAction"
    )]
    CompanyType,
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::company_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyType.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity (association not loaded)
impl From<Model> for Company {
    fn from(model: Model) -> Self {
        Company {
            id: model.id,
            trade_name: model.trade_name,
            legal_name: model.legal_name,
            tax_id: model.tax_id,
            address: model.address,
            company_type_id: model.company_type_id,
            company_type: None,
        }
    }
}

impl Record for Company {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;

    const KIND: &'static str = "company";

    fn id(&self) -> i32 {
        self.id
    }

    fn id_column() -> Column {
        Column::Id
    }

    fn into_row(self, identity: Identity) -> ActiveModel {
        ActiveModel {
            id: identity.into_value(),
            trade_name: Set(self.trade_name),
            legal_name: Set(self.legal_name),
            tax_id: Set(self.tax_id),
            address: Set(self.address),
            company_type_id: Set(self.company_type_id),
        }
    }

    fn from_model(model: Model) -> Self {
        model.into()
    }
}
