//! Session cookie pair construction.
//!
//! An authenticated session is carried by two client-held cookies:
//! - `Authorization` - the signed session token as `Bearer <token>`, HttpOnly,
//!   expiring 3 hours after issuance;
//! - `User` - a script-readable JSON marker `{role, id}` expiring exactly one
//!   second earlier.
//!
//! Invariant: the marker never outlives the credential. Both expiries are
//! computed independently from the one base timestamp the session was issued
//! at, never derived from each other or from the clock twice.

use axum_extra::extract::cookie::Cookie;
use time::{Duration, OffsetDateTime};

use crate::{
    model::auth::UserCookieDto,
    server::{
        error::AppError, model::auth::SessionUser, service::token::SESSION_TOKEN_VALIDITY_HOURS,
    },
};

/// Name of the HttpOnly credential cookie.
pub const AUTH_COOKIE: &str = "Authorization";
/// Name of the script-readable marker cookie.
pub const USER_COOKIE: &str = "User";

/// How much earlier the marker cookie expires than the credential cookie.
const MARKER_EXPIRY_SKEW: Duration = Duration::seconds(1);

/// Builder for the session cookie pair.
pub struct SessionCookies;

impl SessionCookies {
    /// Builds the credential/marker cookie pair from one base timestamp.
    ///
    /// # Arguments
    /// - `token` - Signed session token
    /// - `user` - The authenticated user for the marker payload
    /// - `issued_at` - Base timestamp both expiries derive from
    ///
    /// # Returns
    /// - `Ok((credential, marker))` - The cookie pair ready to be added to a jar
    /// - `Err(AppError::InternalError)` - Marker payload failed to serialize
    pub fn build(
        token: &str,
        user: &SessionUser,
        issued_at: OffsetDateTime,
    ) -> Result<(Cookie<'static>, Cookie<'static>), AppError> {
        let session_ttl = Duration::hours(SESSION_TOKEN_VALIDITY_HOURS);

        let credential = Cookie::build((AUTH_COOKIE, format!("Bearer {}", token)))
            .path("/")
            .http_only(true)
            .expires(issued_at + session_ttl)
            .build();

        let marker_payload = serde_json::to_string(&UserCookieDto {
            role: user.role.clone(),
            id: user.id,
        })
        .map_err(|e| {
            AppError::InternalError(format!("Failed to serialize user marker cookie: {}", e))
        })?;

        let marker = Cookie::build((USER_COOKIE, marker_payload))
            .path("/")
            .expires(issued_at + session_ttl - MARKER_EXPIRY_SKEW)
            .build();

        Ok((credential, marker))
    }

    /// Builds removal cookies clearing both session cookies.
    ///
    /// Clearing an absent cookie is not an error; the pair can be sent
    /// unconditionally.
    ///
    /// # Returns
    /// - `(credential, marker)` - Removal cookies for the pair
    pub fn clear() -> (Cookie<'static>, Cookie<'static>) {
        let mut credential = Cookie::build((AUTH_COOKIE, ""))
            .path("/")
            .http_only(true)
            .build();
        credential.make_removal();

        let mut marker = Cookie::build((USER_COOKIE, "")).path("/").build();
        marker.make_removal();

        (credential, marker)
    }
}
