//! Role data repository for database operations.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::role::Role;

/// Repository providing database operations for the closed role set.
pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a role by its id.
    ///
    /// # Arguments
    /// - `id` - Role id from the closed set
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - Role found
    /// - `Ok(None)` - No role with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Role::from_entity))
    }
}
