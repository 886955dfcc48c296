use sea_orm_migration::{prelude::*, schema::*};

use super::m20260405_000004_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statistics::Table)
                    .if_not_exists()
                    .col(pk_auto(Statistics::Id))
                    .col(integer_uniq(Statistics::AccountId))
                    .col(string(Statistics::ApiKey))
                    .col(integer(Statistics::NumberOfRequests).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistics_account_id")
                            .from(Statistics::Table, Statistics::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statistics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Statistics {
    Table,
    Id,
    AccountId,
    ApiKey,
    NumberOfRequests,
}
