//! Image factory for creating test avatar images.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an avatar image for the given account.
///
/// # Arguments
/// - `db` - Database connection
/// - `account_id` - Account the avatar belongs to
///
/// # Returns
/// - `Ok(entity::image::Model)` - Created image entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_image(
    db: &DatabaseConnection,
    account_id: i32,
) -> Result<entity::image::Model, DbErr> {
    entity::image::ActiveModel {
        account_id: ActiveValue::Set(account_id),
        url: ActiveValue::Set(format!("https://cdn.example.com/avatar/{}.png", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
