use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260405_000002_create_operator_table::Operator, m20260405_000003_create_client_table::Client,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commission::Table)
                    .if_not_exists()
                    .col(pk_auto(Commission::Id))
                    .col(string(Commission::Title))
                    .col(integer(Commission::AuthorId))
                    .col(integer(Commission::ContractorId))
                    .col(
                        timestamp(Commission::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_author_id")
                            .from(Commission::Table, Commission::AuthorId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commission_contractor_id")
                            .from(Commission::Table, Commission::ContractorId)
                            .to(Operator::Table, Operator::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Commission {
    Table,
    Id,
    Title,
    AuthorId,
    ContractorId,
    CreatedAt,
}
