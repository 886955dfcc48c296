//! Role factory for seeding the closed role set in tests.
//!
//! Production databases receive the role rows from a seed migration; tests build
//! their schema directly from the entities, so this module re-creates the same
//! closed set on demand.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Seeds the closed role set used by the application.
///
/// Inserts the three fixed roles with the same ids the seed migration uses:
/// `1 = admin`, `2 = operator`, `3 = basic`. Call this before creating accounts,
/// since the account table references a role by id.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - All three roles inserted
/// - `Err(DbErr)` - Database error during insert (e.g. roles already seeded)
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (id, name) in [(1, "admin"), (2, "operator"), (3, "basic")] {
        entity::role::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
