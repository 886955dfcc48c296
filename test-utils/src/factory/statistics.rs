//! Statistics factory for creating test usage-statistics rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a usage-statistics row for the given account.
///
/// # Arguments
/// - `db` - Database connection
/// - `account_id` - Account the statistics belong to
/// - `api_key` - API key mirrored into the statistics row
///
/// # Returns
/// - `Ok(entity::statistics::Model)` - Created statistics entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_statistics(
    db: &DatabaseConnection,
    account_id: i32,
    api_key: &str,
) -> Result<entity::statistics::Model, DbErr> {
    entity::statistics::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        api_key: ActiveValue::Set(api_key.to_string()),
        number_of_requests: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(db)
    .await
}
