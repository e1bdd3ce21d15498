//! Migration: Create companies table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_company_types_table::CompanyTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Companies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Companies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Companies::TradeName).string_len(100).not_null())
                    .col(ColumnDef::new(Companies::LegalName).string_len(150).not_null())
                    .col(ColumnDef::new(Companies::TaxId).string_len(18).not_null())
                    .col(ColumnDef::new(Companies::Address).string_len(200).not_null())
                    .col(ColumnDef::new(Companies::CompanyTypeId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_companies_company_type_id")
                            .from(Companies::Table, Companies::CompanyTypeId)
                            .to(CompanyTypes::Table, CompanyTypes::Id)
                            .on_delete(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_companies_company_type_id")
                    .table(Companies::Table)
                    .col(Companies::CompanyTypeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Companies::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Companies {
    Table,
    Id,
    TradeName,
    LegalName,
    TaxId,
    Address,
    CompanyTypeId,
}
