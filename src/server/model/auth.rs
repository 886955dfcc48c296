//! Authentication domain models: credentials, token claims, issued sessions.

use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::model::auth::SessionUserDto;

/// Login credentials as submitted by the client.
pub struct Credentials {
    /// Login name identifying the account.
    pub login: String,
    /// Candidate password, never logged or stored.
    pub password: Secret<String>,
}

/// Claims of an activation token.
///
/// The payload IS the not-yet-created account; consuming the token at
/// activation materializes it. Validity is solely signature and expiry -
/// nothing is tracked server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationClaims {
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
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Claims of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject - account id.
    pub sub: i32,
    /// Login name of the account.
    pub login: String,
    /// Email address of the account.
    pub email: String,
    /// Role name of the account.
    pub role: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// The authenticated user embedded in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Account id.
    pub id: i32,
    /// Login name of the account.
    pub login: String,
    /// Email address of the account.
    pub email: String,
    /// Role name of the account.
    pub role: String,
}

impl SessionUser {
    /// Converts the session user to a DTO for API responses.
    ///
    /// # Returns
    /// - `SessionUserDto` - The converted session user DTO
    pub fn into_dto(self) -> SessionUserDto {
        SessionUserDto {
            id: self.id,
            login: self.login,
            email: self.email,
            role: self.role,
        }
    }
}

/// A freshly issued session: the signed token, the user it represents, and
/// the single base timestamp both cookie expiries derive from.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// Signed session token.
    pub token: String,
    /// The authenticated user.
    pub user: SessionUser,
    /// Base timestamp for the token and both cookie expiries.
    pub issued_at: DateTime<Utc>,
}
