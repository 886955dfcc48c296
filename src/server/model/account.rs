//! Account domain models and parameters.
//!
//! Provides domain models for persisted accounts, the ephemeral pending
//! registration carried inside activation tokens, and the composed
//! account-detail record returned by reads. Includes parameter types for
//! account creation and registration requests.

use chrono::{DateTime, Utc};
use secrecy::Secret;

use crate::model::account::{
    AccountDetailDto, ClientDto, ImageDto, OperatorDto, StatisticsDto,
};
use crate::server::model::role::Role;

/// A persisted account identity.
///
/// Holds everything the store keeps for an account, including the password
/// hash and API key. Neither leaves the server; DTO conversions exclude them.
#[derive(Debug, Clone)]
pub struct Account {
    /// Account id.
    pub id: i32,
    /// Unique login name.
    pub login: String,
    /// Unique email address.
    pub email: String,
    /// Unique generated API key.
    pub api_key: String,
    /// Argon2 hash of the account password, PHC string format.
    pub hash: Secret<String>,
    /// Role id from the closed role set.
    pub role_id: i32,
    /// When the account was created (i.e. when activation succeeded).
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Account` - The converted account domain model
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            login: entity.login,
            email: entity.email,
            api_key: entity.api_key,
            hash: Secret::new(entity.hash),
            role_id: entity.role_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// The not-yet-created account carried inside an activation token.
///
/// This is the entire server-side state of a pending registration: it is
/// minted at request time, mailed to the user, and exchanged for a real
/// account at activation. Nothing about it is persisted in between.
#[derive(Debug, Clone)]
pub struct PendingAccount {
    /// Requested unique login name.
    pub login: String,
    /// Requested unique email address.
    pub email: String,
    /// Pre-generated unique API key.
    pub api_key: String,
    /// Argon2 hash of the requested password, PHC string format.
    pub hash: String,
    /// Role id resolved from the signup request.
    pub role_id: i32,
}

/// Parameters for creating an account at activation time.
#[derive(Debug, Clone)]
pub struct NewAccountParam {
    /// Unique login name.
    pub login: String,
    /// Unique email address.
    pub email: String,
    /// Unique generated API key.
    pub api_key: String,
    /// Argon2 hash of the account password, PHC string format.
    pub hash: String,
    /// Role id from the closed role set.
    pub role_id: i32,
}

/// Parameters for a phase-1 registration request.
#[derive(Debug)]
pub struct RegisterRequestParam {
    /// Requested login name.
    pub login: String,
    /// Requested email address.
    pub email: String,
    /// Requested password, kept secret until hashed.
    pub password: Secret<String>,
    /// Whether the requester asked for the elevated operator role.
    pub want_to_be_operator: bool,
}

/// Composed account record for reads.
///
/// Carries the account's public fields together with its related
/// sub-resources, already filtered and ordered per the read contract.
#[derive(Debug, Clone)]
pub struct AccountDetail {
    /// Account id.
    pub id: i32,
    /// Unique login name.
    pub login: String,
    /// Unique email address.
    pub email: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
    /// Role of the account.
    pub role: Role,
    /// Operator (contractor) profile, if the account has one.
    pub operator: Option<OperatorProfile>,
    /// Client (author) profile, if the account has one.
    pub client: Option<ClientProfile>,
    /// Avatar image, if one was uploaded.
    pub image: Option<Avatar>,
    /// Usage statistics, if tracked for this account.
    pub statistics: Option<UsageStatistics>,
}

/// Operator profile with its commissions, newest first.
#[derive(Debug, Clone)]
pub struct OperatorProfile {
    /// Operator profile id.
    pub id: i32,
    /// Free-form profile text.
    pub bio: Option<String>,
    /// Ids of commissions executed by this operator, newest first.
    pub commission_ids: Vec<i32>,
}

/// Client profile with its commissions, newest first.
#[derive(Debug, Clone)]
pub struct ClientProfile {
    /// Client profile id.
    pub id: i32,
    /// Free-form profile text.
    pub bio: Option<String>,
    /// Ids of commissions authored by this client, newest first.
    pub commission_ids: Vec<i32>,
}

/// Account avatar image.
#[derive(Debug, Clone)]
pub struct Avatar {
    /// Image id.
    pub id: i32,
    /// Public URL of the image.
    pub url: String,
}

/// Usage statistics for an account.
///
/// The mirrored API key never leaves the repository layer.
#[derive(Debug, Clone)]
pub struct UsageStatistics {
    /// Account the statistics belong to.
    pub account_id: i32,
    /// Number of API requests recorded.
    pub number_of_requests: i32,
}

impl AccountDetail {
    /// Converts the composed record to a DTO for API responses.
    ///
    /// The DTO shape is the read projection: hash, API key, and foreign-key
    /// columns are absent, commission lists stay in newest-first order.
    ///
    /// # Returns
    /// - `AccountDetailDto` - The converted account detail DTO
    pub fn into_dto(self) -> AccountDetailDto {
        AccountDetailDto {
            id: self.id,
            login: self.login,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
            role: self.role.into_dto(),
            operator: self.operator.map(|operator| OperatorDto {
                id: operator.id,
                bio: operator.bio,
                contractor_commissions: operator.commission_ids,
            }),
            image: self.image.map(|image| ImageDto {
                id: image.id,
                url: image.url,
            }),
            client: self.client.map(|client| ClientDto {
                id: client.id,
                bio: client.bio,
                author_commissions: client.commission_ids,
            }),
            statistics: self.statistics.map(|statistics| StatisticsDto {
                account_id: statistics.account_id,
                number_of_requests: statistics.number_of_requests,
            }),
        }
    }
}
