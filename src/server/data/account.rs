//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for managing account records in the
//! database. It handles identity lookups, API-key collision checks, account creation
//! at activation time, and the composed account-detail read, with conversion between
//! entity models and domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    account::{
        Account, AccountDetail, Avatar, ClientProfile, NewAccountParam, OperatorProfile,
        UsageStatistics,
    },
    role::Role,
};

/// Repository providing database operations for account management.
///
/// This struct holds a reference to the database connection and provides methods
/// for identity lookups, API-key checks, account creation, and composed reads.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an account by login name.
    ///
    /// # Arguments
    /// - `login` - Login name to look up
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that login
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_login(&self, login: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Login.eq(login))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account matching a login OR an email.
    ///
    /// Used by the phase-1 uniqueness check: a hit on either identity field
    /// means the requested identity is taken.
    ///
    /// # Arguments
    /// - `login` - Login name to check
    /// - `email` - Email address to check
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - An account holds the login or the email
    /// - `Ok(None)` - Both identity fields are free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_login_or_email(
        &self,
        login: &str,
        email: &str,
    ) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(
                Condition::any()
                    .add(entity::account::Column::Login.eq(login))
                    .add(entity::account::Column::Email.eq(email)),
            )
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Checks whether an API key is already assigned to an account.
    ///
    /// One round-trip per call; the registration workflow calls this in its
    /// retry-until-unique loop.
    ///
    /// # Arguments
    /// - `api_key` - Candidate key to check
    ///
    /// # Returns
    /// - `Ok(true)` - Key is in use
    /// - `Ok(false)` - Key is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn api_key_in_use(&self, api_key: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::ApiKey.eq(api_key))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates an account from a verified pending registration.
    ///
    /// The insert relies on the store's unique constraints over login, email,
    /// and API key; a violation is returned unmapped for the service layer to
    /// classify.
    ///
    /// # Arguments
    /// - `param` - Account fields extracted from the activation token
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account with generated id
    /// - `Err(DbErr)` - Unique constraint violation or other database error
    pub async fn create(&self, param: NewAccountParam) -> Result<Account, DbErr> {
        let now = Utc::now();
        let entity = entity::account::ActiveModel {
            login: ActiveValue::Set(param.login),
            email: ActiveValue::Set(param.email),
            hash: ActiveValue::Set(param.hash),
            api_key: ActiveValue::Set(param.api_key),
            role_id: ActiveValue::Set(param.role_id),
            operator_id: ActiveValue::Set(None),
            client_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Composes the account-detail record for an id.
    ///
    /// Loads the account with its role, profiles, avatar, and statistics, and
    /// projects related commissions down to id lists ordered newest-first.
    /// The sensitive columns never reach the returned domain model.
    ///
    /// # Arguments
    /// - `id` - Account id to compose
    ///
    /// # Returns
    /// - `Ok(Some(AccountDetail))` - Composed record
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr::RecordNotFound)` - Account references a missing role
    /// - `Err(DbErr)` - Database error during composition
    pub async fn find_detail(&self, id: i32) -> Result<Option<AccountDetail>, DbErr> {
        let Some(account) = entity::prelude::Account::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let role = account
            .find_related(entity::prelude::Role)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Role {} referenced by account {} not found",
                account.role_id, account.id
            )))?;

        let operator = account
            .find_related(entity::prelude::Operator)
            .one(self.db)
            .await?;
        let operator = match operator {
            Some(operator) => {
                let commission_ids = self
                    .commission_ids(entity::commission::Column::ContractorId, operator.id)
                    .await?;
                Some(OperatorProfile {
                    id: operator.id,
                    bio: operator.bio,
                    commission_ids,
                })
            }
            None => None,
        };

        let client = account
            .find_related(entity::prelude::Client)
            .one(self.db)
            .await?;
        let client = match client {
            Some(client) => {
                let commission_ids = self
                    .commission_ids(entity::commission::Column::AuthorId, client.id)
                    .await?;
                Some(ClientProfile {
                    id: client.id,
                    bio: client.bio,
                    commission_ids,
                })
            }
            None => None,
        };

        let image = account
            .find_related(entity::prelude::Image)
            .one(self.db)
            .await?
            .map(|image| Avatar {
                id: image.id,
                url: image.url,
            });

        let statistics = account
            .find_related(entity::prelude::Statistics)
            .one(self.db)
            .await?
            .map(|statistics| UsageStatistics {
                account_id: statistics.account_id,
                number_of_requests: statistics.number_of_requests,
            });

        Ok(Some(AccountDetail {
            id: account.id,
            login: account.login,
            email: account.email,
            created_at: account.created_at,
            updated_at: account.updated_at,
            role: Role::from_entity(role),
            operator,
            client,
            image,
            statistics,
        }))
    }

    /// Fetches commission ids for one side of the relation, newest first.
    async fn commission_ids(
        &self,
        side: entity::commission::Column,
        profile_id: i32,
    ) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Commission::find()
            .select_only()
            .column(entity::commission::Column::Id)
            .filter(side.eq(profile_id))
            .order_by_desc(entity::commission::Column::CreatedAt)
            .into_tuple()
            .all(self.db)
            .await
    }
}
