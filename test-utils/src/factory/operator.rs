//! Operator factory for creating test operator (contractor) profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating operator profiles with customizable fields.
pub struct OperatorFactory<'a> {
    db: &'a DatabaseConnection,
    bio: Option<String>,
}

impl<'a> OperatorFactory<'a> {
    /// Creates a new OperatorFactory with default values.
    ///
    /// Defaults:
    /// - bio: `"Operator {id} bio"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            bio: Some(format!("Operator {} bio", id)),
        }
    }

    /// Sets the bio for the operator profile.
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Builds and inserts the operator entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::operator::Model)` - Created operator entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::operator::Model, DbErr> {
        entity::operator::ActiveModel {
            bio: ActiveValue::Set(self.bio),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an operator profile with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::operator::Model)` - Created operator entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_operator(db: &DatabaseConnection) -> Result<entity::operator::Model, DbErr> {
    OperatorFactory::new(db).build().await
}
