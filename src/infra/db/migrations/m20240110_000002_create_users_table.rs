//! Migration: Create the users table.
//!
//! The unique indexes on email and login are the authoritative guard
//! against concurrent duplicate registrations; the application-level
//! lookups before insert are advisory only.

use sea_orm_migration::prelude::*;

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
                    .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Users::Login).string_len(31).not_null())
                    .col(ColumnDef::new(Users::Email).string_len(51).not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::CountryCode).string_len(3).not_null())
                    .col(
                        ColumnDef::new(Users::IsPublic)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::PhoneNumber)
                            .string_len(21)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::Image)
                            .string_len(200)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_login")
                    .table(Users::Table)
                    .col(Users::Login)
                    .unique()
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
    Login,
    Email,
    PasswordHash,
    CountryCode,
    IsPublic,
    PhoneNumber,
    Image,
    CreatedAt,
}
