//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::User;
use crate::infra::repositories::base::{Identity, Record};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Unique per company only, see `UserRepository::tax_id_exists`
    pub tax_id: String,
    pub user_profile_id: i32,
    pub company_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_profile::Entity",
        from = "Column::UserProfileId",
        to = "super::user_profile::Column::Id",
        on_delete = "NoAction"
    )]
    UserProfile,
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "NoAction"
    )]
    Company,
}

impl Related<super::user_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserProfile.def()
    }
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            tax_id: model.tax_id,
            user_profile_id: model.user_profile_id,
            company_id: model.company_id,
            user_profile: None,
            company: None,
        }
    }
}

impl Record for User {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;

    const KIND: &'static str = "user";

    fn id(&self) -> i32 {
        self.id
    }

    fn id_column() -> Column {
        Column::Id
    }

    fn into_row(self, identity: Identity) -> ActiveModel {
        ActiveModel {
            id: identity.into_value(),
            name: Set(self.name),
            tax_id: Set(self.tax_id),
            user_profile_id: Set(self.user_profile_id),
            company_id: Set(self.company_id),
        }
    }

    fn from_model(model: Model) -> Self {
        model.into()
    }
}
