//! User profile database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::UserProfile;
use crate::infra::repositories::base::{Identity, Record};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for UserProfile {
    fn from(model: Model) -> Self {
        UserProfile {
            id: model.id,
            name: model.name,
        }
    }
}

impl Record for UserProfile {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;

    const KIND: &'static str = "user profile";

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
        }
    }

    fn from_model(model: Model) -> Self {
        model.into()
    }
}
