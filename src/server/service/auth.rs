//! Session issuance for credential logins.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, role::RoleRepository},
    error::{auth::AuthError, AppError},
    model::auth::{Credentials, IssuedSession, SessionUser},
    service::{password, token::TokenService},
};

/// Service verifying credentials and issuing sessions.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service for session tokens
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues a session.
    ///
    /// Looks up the account by login and verifies the password against the
    /// stored hash. When no account matches, a fixed dummy hash is verified
    /// instead so the response takes as long as for an existing account.
    /// On success the account's role is resolved and a 3-hour session token
    /// is signed; the returned `issued_at` is the single base timestamp both
    /// cookie expiries must be derived from.
    ///
    /// # Arguments
    /// - `credentials` - Submitted login and password
    ///
    /// # Returns
    /// - `Ok(IssuedSession)` - Signed token, session user, and base timestamp
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown login or wrong password
    /// - `Err(AppError)` - Database or signing failure
    #[tracing::instrument(
        name = "Validate credentials",
        skip(self, credentials),
        fields(login = %credentials.login)
    )]
    pub async fn login(&self, credentials: Credentials) -> Result<IssuedSession, AppError> {
        let account_repo = AccountRepository::new(self.db);
        let role_repo = RoleRepository::new(self.db);

        let account = account_repo.find_by_login(&credentials.login).await?;

        let expected_password_hash = account
            .as_ref()
            .map(|account| account.hash.clone())
            .unwrap_or_else(password::dummy_password_hash);
        password::verify_password(expected_password_hash, credentials.password).await?;

        let Some(account) = account else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(role) = role_repo.find_by_id(account.role_id).await? else {
            return Err(AppError::InternalError(format!(
                "Account {} references missing role {}",
                account.id, account.role_id
            )));
        };

        let issued_at = Utc::now();
        let user = SessionUser {
            id: account.id,
            login: account.login,
            email: account.email,
            role: role.name,
        };
        let token = self.tokens.sign_session(&user, issued_at)?;

        Ok(IssuedSession {
            token,
            user,
            issued_at,
        })
    }
}
