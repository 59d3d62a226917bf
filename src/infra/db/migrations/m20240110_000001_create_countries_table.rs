//! Migration: Create the countries reference table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Countries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Countries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Countries::Name)
                            .string_len(80)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Countries::Alpha2).string_len(3).not_null())
                    .col(ColumnDef::new(Countries::Alpha3).string_len(4).not_null())
                    .col(ColumnDef::new(Countries::Region).string_len(80).not_null())
                    .to_owned(),
            )
            .await?;

        // Lookup path: country-by-alpha2
        manager
            .create_index(
                Index::create()
                    .name("idx_countries_alpha2")
                    .table(Countries::Table)
                    .col(Countries::Alpha2)
                    .to_owned(),
            )
            .await?;

        // Filter path: list-by-region
        manager
            .create_index(
                Index::create()
                    .name("idx_countries_region")
                    .table(Countries::Table)
                    .col(Countries::Region)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Countries {
    Table,
    Id,
    Name,
    Alpha2,
    Alpha3,
    Region,
}
