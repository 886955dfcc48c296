//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an account together with its full relation graph.
///
/// This is a convenience method that creates:
/// 1. The seeded role set (admin/operator/basic)
/// 2. Operator profile
/// 3. Client profile
/// 4. Account linked to both profiles
/// 5. Avatar image
/// 6. Statistics row
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((account, operator, client))` - Tuple of the created core entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_account_with_relations(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::account::Model,
        entity::operator::Model,
        entity::client::Model,
    ),
    DbErr,
> {
    crate::factory::role::seed_roles(db).await?;
    let operator = crate::factory::operator::create_operator(db).await?;
    let client = crate::factory::client::create_client(db).await?;
    let account = crate::factory::account::AccountFactory::new(db)
        .operator_id(operator.id)
        .client_id(client.id)
        .build()
        .await?;
    crate::factory::image::create_image(db, account.id).await?;
    crate::factory::statistics::create_statistics(db, account.id, &account.api_key).await?;

    Ok((account, operator, client))
}
