use sea_orm_migration::prelude::*;

use super::m20260405_000001_create_role_table::Role;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let insert = Query::insert()
            .into_table(Role::Table)
            .columns([Role::Id, Role::Name])
            .values_panic([1.into(), "admin".into()])
            .values_panic([2.into(), "operator".into()])
            .values_panic([3.into(), "basic".into()])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Role::Table)
            .cond_where(Expr::col(Role::Id).is_in([1, 2, 3]))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
