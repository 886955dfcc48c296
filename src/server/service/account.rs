//! Account read composition.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository, error::AppError, model::account::AccountDetail,
};

/// Service providing read access to composed account records.
pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the composed account record for an id.
    ///
    /// Pure read composition - the repository applies the projection and
    /// ordering contract; no further business logic happens here.
    ///
    /// # Arguments
    /// - `id` - Account id to look up
    ///
    /// # Returns
    /// - `Ok(Some(AccountDetail))` - Composed record for the account
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError::DbErr)` - Database error during composition
    pub async fn get_account_detail(&self, id: i32) -> Result<Option<AccountDetail>, AppError> {
        let account_repo = AccountRepository::new(self.db);
        let detail = account_repo.find_detail(id).await?;
        Ok(detail)
    }
}
