pub use sea_orm_migration::prelude::*;

mod m20260405_000001_create_role_table;
mod m20260405_000002_create_operator_table;
mod m20260405_000003_create_client_table;
mod m20260405_000004_create_account_table;
mod m20260406_000005_create_commission_table;
mod m20260406_000006_create_image_table;
mod m20260406_000007_create_statistics_table;
mod m20260406_000008_seed_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260405_000001_create_role_table::Migration),
            Box::new(m20260405_000002_create_operator_table::Migration),
            Box::new(m20260405_000003_create_client_table::Migration),
            Box::new(m20260405_000004_create_account_table::Migration),
            Box::new(m20260406_000005_create_commission_table::Migration),
            Box::new(m20260406_000006_create_image_table::Migration),
            Box::new(m20260406_000007_create_statistics_table::Migration),
            Box::new(m20260406_000008_seed_roles::Migration),
        ]
    }
}
