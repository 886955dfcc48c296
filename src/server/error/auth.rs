use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::MessageDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login or password did not match a stored account.
    ///
    /// Covers both an unknown login and a wrong password; the two cases are
    /// deliberately indistinguishable to the caller. Results in a 401
    /// Unauthorized response.
    #[error("invalid login or password")]
    InvalidCredentials,

    /// No session credential accompanied the request.
    ///
    /// The `Authorization` cookie is absent or does not carry a `Bearer` value.
    /// Results in a 401 Unauthorized response.
    #[error("no authenticated session")]
    SessionMissing,

    /// The session credential failed verification.
    ///
    /// The cookie carried a token with a bad signature or past its expiry.
    /// Results in a 401 Unauthorized response.
    #[error("session token failed verification")]
    SessionInvalid(#[source] jsonwebtoken::errors::Error),

    /// An activation token could not be decoded or failed verification.
    ///
    /// Results in a 403 Forbidden response; no account is created.
    #[error("unauthorized account verification attempt")]
    UnauthorizedActivation(#[source] jsonwebtoken::errors::Error),

    /// An account with the requested login or email already exists.
    ///
    /// Results in a 409 Conflict response; no token is minted and no mail sent.
    #[error("an account with this login or email already exists")]
    IdentityTaken,

    /// The store rejected the account create.
    ///
    /// A unique constraint fired at activation time - either the identity was
    /// claimed between the phase-1 check and the phase-2 create, or the same
    /// activation token was replayed. Results in a 422 Unprocessable Entity
    /// response.
    #[error("account creation failed store validation")]
    AccountValidation(#[source] sea_orm::DbErr),

    /// The activation email could not be dispatched.
    ///
    /// Terminal for the registration request; nothing is retried. Results in a
    /// 503 Service Unavailable response.
    #[error("failed to dispatch the activation email")]
    MailDispatch(#[source] reqwest::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps each failure to its status code and a fixed human-readable message:
/// - `InvalidCredentials` → 401 "Invalid login or password."
/// - `SessionMissing` / `SessionInvalid` → 401 "You are not logged in."
/// - `UnauthorizedActivation` → 403
/// - `IdentityTaken` → 409
/// - `AccountValidation` → 422
/// - `MailDispatch` → 503
///
/// Errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid login or password."),
            Self::SessionMissing | Self::SessionInvalid(_) => {
                (StatusCode::UNAUTHORIZED, "You are not logged in.")
            }
            Self::UnauthorizedActivation(_) => (
                StatusCode::FORBIDDEN,
                "Unauthorized account verification attempt.",
            ),
            Self::IdentityTaken => (StatusCode::CONFLICT, "Such a user already exists."),
            Self::AccountValidation(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "The account could not be created.",
            ),
            Self::MailDispatch(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Failed to send the activation email.",
            ),
        };

        tracing::debug!("Auth error: {}", self);

        (
            status,
            Json(MessageDto {
                success: false,
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}
