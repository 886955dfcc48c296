//! Authentication guard for session-protected endpoints.

use axum_extra::extract::CookieJar;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AUTH_COOKIE,
    model::auth::SessionClaims,
    service::token::TokenService,
};

/// Guard verifying the session credential cookie of a request.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    jar: &'a CookieJar,
}

impl<'a> AuthGuard<'a> {
    /// Creates a new AuthGuard instance.
    ///
    /// # Arguments
    /// - `tokens` - Token service for session verification
    /// - `jar` - Cookie jar extracted from the request
    ///
    /// # Returns
    /// - `AuthGuard` - New guard instance
    pub fn new(tokens: &'a TokenService, jar: &'a CookieJar) -> Self {
        Self { tokens, jar }
    }

    /// Requires an authenticated session.
    ///
    /// Reads the `Authorization` cookie, strips the `Bearer ` prefix, and
    /// verifies the session token.
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Verified session claims
    /// - `Err(AppError::AuthErr(SessionMissing))` - Cookie absent or not a Bearer value
    /// - `Err(AppError::AuthErr(SessionInvalid))` - Token failed verification
    pub fn require(&self) -> Result<SessionClaims, AppError> {
        let Some(cookie) = self.jar.get(AUTH_COOKIE) else {
            return Err(AuthError::SessionMissing.into());
        };

        let token = cookie
            .value()
            .strip_prefix("Bearer ")
            .ok_or(AuthError::SessionMissing)?;

        let claims = self.tokens.decode_session(token)?;

        Ok(claims)
    }
}
