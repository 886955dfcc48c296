use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260405_000001_create_role_table::Role, m20260405_000002_create_operator_table::Operator,
    m20260405_000003_create_client_table::Client,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string_uniq(Account::Login))
                    .col(string_uniq(Account::Email))
                    .col(string(Account::Hash))
                    .col(string_uniq(Account::ApiKey))
                    .col(integer(Account::RoleId))
                    .col(integer_null(Account::OperatorId))
                    .col(integer_null(Account::ClientId))
                    .col(
                        timestamp(Account::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Account::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_role_id")
                            .from(Account::Table, Account::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_operator_id")
                            .from(Account::Table, Account::OperatorId)
                            .to(Operator::Table, Operator::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_client_id")
                            .from(Account::Table, Account::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    Login,
    Email,
    Hash,
    ApiKey,
    RoleId,
    OperatorId,
    ClientId,
    CreatedAt,
    UpdatedAt,
}
