//! Migration: Create users table.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_user_profiles_table::UserProfiles;
use super::m20240101_000003_create_companies_table::Companies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Users::TaxId).string_len(14).not_null())
                    .col(ColumnDef::new(Users::UserProfileId).integer().not_null())
                    .col(ColumnDef::new(Users::CompanyId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_user_profile_id")
                            .from(Users::Table, Users::UserProfileId)
                            .to(UserProfiles::Table, UserProfiles::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_company_id")
                            .from(Users::Table, Users::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        // Not unique: tax ids repeat across companies, and the per-company
        // rule is checked before insert rather than by the store
        manager
            .create_index(
                Index::create()
                    .name("idx_users_company_id_tax_id")
                    .table(Users::Table)
                    .col(Users::CompanyId)
                    .col(Users::TaxId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Name,
    TaxId,
    UserProfileId,
    CompanyId,
}
