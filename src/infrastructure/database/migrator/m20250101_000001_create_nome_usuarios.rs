//! Migration to create nome_usuarios table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NomeUsuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NomeUsuarios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NomeUsuarios::Name).string().not_null())
                    .col(ColumnDef::new(NomeUsuarios::Email).string().not_null())
                    .col(ColumnDef::new(NomeUsuarios::PhoneNumber).string().null())
                    .col(ColumnDef::new(NomeUsuarios::BirthDate).date().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NomeUsuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum NomeUsuarios {
    Table,
    Id,
    Name,
    Email,
    PhoneNumber,
    BirthDate,
}
