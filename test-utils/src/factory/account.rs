//! Account factory for creating test account entities.
//!
//! This module provides factory methods for creating account entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Placeholder PHC-format argon2 hash for accounts whose password is never verified.
///
/// Tests that exercise password verification must hash a real password instead.
pub const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Factory for creating test accounts with customizable fields.
///
/// Provides a builder pattern for creating account entities with default values
/// that can be overridden as needed for specific test scenarios. The referenced
/// role must exist; call `factory::role::seed_roles` first.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db)
///     .login("vermeer")
///     .email("vermeer@example.com")
///     .role_id(2)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    login: String,
    email: String,
    hash: String,
    api_key: String,
    role_id: i32,
    operator_id: Option<i32>,
    client_id: Option<i32>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - login: `"account_{id}"` where id is auto-incremented
    /// - email: `"account_{id}@example.com"`
    /// - hash: placeholder PHC string (not verifiable)
    /// - api_key: `"key_{id}"`
    /// - role_id: `3` (basic)
    /// - operator_id / client_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AccountFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            login: format!("account_{}", id),
            email: format!("account_{}@example.com", id),
            hash: DUMMY_HASH.to_string(),
            api_key: format!("key_{}", id),
            role_id: 3,
            operator_id: None,
            client_id: None,
        }
    }

    /// Sets the login for the account.
    pub fn login(mut self, login: impl Into<String>) -> Self {
        self.login = login.into();
        self
    }

    /// Sets the email address for the account.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash (PHC string) for the account.
    pub fn hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = hash.into();
        self
    }

    /// Sets the API key for the account.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Sets the role id for the account.
    pub fn role_id(mut self, role_id: i32) -> Self {
        self.role_id = role_id;
        self
    }

    /// Links the account to an operator profile.
    pub fn operator_id(mut self, operator_id: i32) -> Self {
        self.operator_id = Some(operator_id);
        self
    }

    /// Links the account to a client profile.
    pub fn client_id(mut self, client_id: i32) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        let now = Utc::now();
        entity::account::ActiveModel {
            login: ActiveValue::Set(self.login),
            email: ActiveValue::Set(self.email),
            hash: ActiveValue::Set(self.hash),
            api_key: ActiveValue::Set(self.api_key),
            role_id: ActiveValue::Set(self.role_id),
            operator_id: ActiveValue::Set(self.operator_id),
            client_id: ActiveValue::Set(self.client_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an account with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::account::Model)` - Created account entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::role::seed_roles;

    #[tokio::test]
    async fn creates_account_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        seed_roles(db).await?;

        let account = create_account(db).await?;

        assert!(!account.login.is_empty());
        assert!(!account.email.is_empty());
        assert!(!account.api_key.is_empty());
        assert_eq!(account.role_id, 3);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_accounts() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        seed_roles(db).await?;

        let first = create_account(db).await?;
        let second = create_account(db).await?;

        assert_ne!(first.login, second.login);
        assert_ne!(first.email, second.email);
        assert_ne!(first.api_key, second.api_key);

        Ok(())
    }
}
