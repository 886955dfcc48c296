//! Signing and verification of activation and session tokens.
//!
//! Both token kinds are HS256 JWTs signed with the application secret. The
//! activation token carries a pending registration for 7 days; the session
//! token carries an authenticated session for 3 hours. Decoding always
//! verifies signature and expiry.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        account::PendingAccount,
        auth::{ActivationClaims, SessionClaims, SessionUser},
    },
};

/// Days an activation token stays valid.
pub const ACTIVATION_TOKEN_VALIDITY_DAYS: i64 = 7;
/// Hours a session token stays valid. The session cookie pair derives its
/// expiries from the same constant.
pub const SESSION_TOKEN_VALIDITY_HOURS: i64 = 3;

/// Token service holding the pre-built HS256 keys.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Creates a token service from the application secret.
    ///
    /// # Arguments
    /// - `secret` - Shared HS256 signing secret
    ///
    /// # Returns
    /// - `TokenService` - Service ready to sign and verify tokens
    pub fn new(secret: &Secret<String>) -> Self {
        let secret = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Signs an activation token carrying a pending registration.
    ///
    /// The token expires 7 days after `issued_at`.
    ///
    /// # Arguments
    /// - `pending` - The not-yet-created account to embed
    /// - `issued_at` - Base timestamp for `iat` and `exp`
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn sign_activation(
        &self,
        pending: &PendingAccount,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = ActivationClaims {
            login: pending.login.clone(),
            email: pending.email.clone(),
            api_key: pending.api_key.clone(),
            hash: pending.hash.clone(),
            role_id: pending.role_id,
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::days(ACTIVATION_TOKEN_VALIDITY_DAYS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Decodes and verifies an activation token.
    ///
    /// # Arguments
    /// - `token` - Token string from the activation link
    ///
    /// # Returns
    /// - `Ok(ActivationClaims)` - Verified pending registration
    /// - `Err(AuthError::UnauthorizedActivation)` - Undecodable, tampered, or
    ///   expired token
    pub fn decode_activation(&self, token: &str) -> Result<ActivationClaims, AuthError> {
        decode::<ActivationClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::UnauthorizedActivation)
    }

    /// Signs a session token for an authenticated user.
    ///
    /// The token expires 3 hours after `issued_at`; the caller derives the
    /// cookie expiries from the same timestamp.
    ///
    /// # Arguments
    /// - `user` - The authenticated user to embed
    /// - `issued_at` - Base timestamp for `iat` and `exp`
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::JwtErr)` - Signing failed
    pub fn sign_session(
        &self,
        user: &SessionUser,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = SessionClaims {
            sub: user.id,
            login: user.login.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + Duration::hours(SESSION_TOKEN_VALIDITY_HOURS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Decodes and verifies a session token.
    ///
    /// # Arguments
    /// - `token` - Token string from the `Authorization` cookie
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Verified session claims
    /// - `Err(AuthError::SessionInvalid)` - Undecodable, tampered, or expired
    ///   token
    pub fn decode_session(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::SessionInvalid)
    }
}
