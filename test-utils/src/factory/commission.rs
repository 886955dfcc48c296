//! Commission factory for creating test commissions.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating commissions with customizable fields.
///
/// A commission links a client (author) to an operator (contractor); both
/// profiles must exist before building. The creation timestamp can be pinned
/// for tests that assert ordering.
pub struct CommissionFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author_id: i32,
    contractor_id: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CommissionFactory<'a> {
    /// Creates a new CommissionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Commission {id}"` where id is auto-incremented
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - Client profile id authoring the commission
    /// - `contractor_id` - Operator profile id executing the commission
    pub fn new(db: &'a DatabaseConnection, author_id: i32, contractor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Commission {}", id),
            author_id,
            contractor_id,
            created_at: Utc::now(),
        }
    }

    /// Sets the title for the commission.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Pins the creation timestamp, for ordering assertions.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the commission entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::commission::Model)` - Created commission entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::commission::Model, DbErr> {
        entity::commission::ActiveModel {
            title: ActiveValue::Set(self.title),
            author_id: ActiveValue::Set(self.author_id),
            contractor_id: ActiveValue::Set(self.contractor_id),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a commission with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `author_id` - Client profile id authoring the commission
/// - `contractor_id` - Operator profile id executing the commission
///
/// # Returns
/// - `Ok(entity::commission::Model)` - Created commission entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_commission(
    db: &DatabaseConnection,
    author_id: i32,
    contractor_id: i32,
) -> Result<entity::commission::Model, DbErr> {
    CommissionFactory::new(db, author_id, contractor_id)
        .build()
        .await
}
