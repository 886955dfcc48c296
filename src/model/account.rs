use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composed account record for `GET /accounts/{id}`.
///
/// The shape encodes the read projection: password hash, API key, and internal
/// foreign-key columns never appear here, and related commissions are id lists
/// ordered newest-first.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetailDto {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub role: RoleDto,
    pub operator: Option<OperatorDto>,
    pub image: Option<ImageDto>,
    pub client: Option<ClientDto>,
    pub statistics: Option<StatisticsDto>,
}

/// Role of an account; the internal role id is not exposed.
#[derive(Debug, Serialize, Deserialize)]
pub struct RoleDto {
    pub name: String,
}

/// Operator (contractor) profile with its commissions, newest first.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorDto {
    pub id: i32,
    pub bio: Option<String>,
    pub contractor_commissions: Vec<i32>,
}

/// Client (author) profile with its commissions, newest first.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    pub id: i32,
    pub bio: Option<String>,
    pub author_commissions: Vec<i32>,
}

/// Account avatar image.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImageDto {
    pub id: i32,
    pub url: String,
}

/// Usage statistics; the mirrored API key and row id are excluded.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub account_id: i32,
    pub number_of_requests: i32,
}
