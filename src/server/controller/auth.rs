use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    model::{
        api::MessageDto,
        auth::{LoginDto, RegisterRequestDto, SessionUserDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::SessionCookies},
        model::{account::RegisterRequestParam, auth::Credentials},
        service::{auth::AuthService, registration::RegistrationService},
        state::AppState,
    },
};

/// Query parameters for the activation endpoint.
#[derive(Deserialize)]
pub struct ActivationParams {
    /// Activation token from the emailed link.
    pub token: String,
}

/// POST /auth/login - Verify credentials and issue a session
///
/// On success sets the session cookie pair: the HttpOnly `Authorization`
/// credential expiring in 3 hours and the script-readable `User` marker
/// expiring 1 second earlier.
///
/// # Returns
/// - `200 OK`: Logged in, both cookies set
/// - `401 Unauthorized`: Unknown login or wrong password, no cookies set
/// - `500 Internal Server Error`: Database or signing error
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.tokens);

    let session = auth_service
        .login(Credentials {
            login: dto.login,
            password: dto.password,
        })
        .await?;

    let issued_at =
        OffsetDateTime::from_unix_timestamp(session.issued_at.timestamp()).map_err(|e| {
            AppError::InternalError(format!("Session timestamp out of cookie range: {}", e))
        })?;
    let (credential, marker) = SessionCookies::build(&session.token, &session.user, issued_at)?;
    let jar = jar.add(credential).add(marker);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(MessageDto {
                success: true,
                message: "Logged in successfully.".to_string(),
            }),
        ),
    ))
}

/// POST /auth/logout - Clear the session cookie pair
///
/// Idempotent: clearing absent cookies is not an error, so no prior login
/// state is required.
///
/// # Returns
/// - `200 OK`: Both cookies cleared
pub async fn logout(jar: CookieJar) -> Result<impl IntoResponse, AppError> {
    let (credential, marker) = SessionCookies::clear();
    let jar = jar.add(credential).add(marker);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(MessageDto {
                success: true,
                message: "Logged out successfully.".to_string(),
            }),
        ),
    ))
}

/// POST /auth/register-request - Phase 1 of the registration workflow
///
/// Validates the requested identity, mints an activation token, and mails the
/// activation link. No account is created yet.
///
/// # Returns
/// - `200 OK`: Activation email dispatched
/// - `409 Conflict`: Login or email already in use
/// - `503 Service Unavailable`: Mail dispatch failed
/// - `500 Internal Server Error`: Database, hashing, or signing error
pub async fn register_request(
    State(state): State<AppState>,
    Json(dto): Json<RegisterRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let registration =
        RegistrationService::new(&state.db, &state.tokens, &state.email_client, &state.app_url);

    registration
        .request_registration(RegisterRequestParam {
            login: dto.login,
            email: dto.email,
            password: dto.password,
            want_to_be_operator: dto.want_to_be_operator,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            success: true,
            message: "We have sent an activation link to your email address.".to_string(),
        }),
    ))
}

/// GET /auth/activation?token=... - Phase 2 of the registration workflow
///
/// Verifies the activation token and materializes the account it carries.
///
/// # Returns
/// - `201 Created`: Account created
/// - `403 Forbidden`: Token undecodable or expired
/// - `422 Unprocessable Entity`: Store validation rejected the create
/// - `500 Internal Server Error`: Other database error
pub async fn activation(
    State(state): State<AppState>,
    Query(params): Query<ActivationParams>,
) -> Result<impl IntoResponse, AppError> {
    let registration =
        RegistrationService::new(&state.db, &state.tokens, &state.email_client, &state.app_url);

    registration.activate(&params.token).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            success: true,
            message: "Successfully verified the user and created the account.".to_string(),
        }),
    ))
}

/// GET /auth/me - Read the current session
///
/// # Returns
/// - `200 OK`: Session user from the verified credential cookie
/// - `401 Unauthorized`: Cookie absent or token failed verification
pub async fn me(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.tokens, &jar);
    let claims = auth_guard.require()?;

    Ok((
        StatusCode::OK,
        Json(SessionUserDto {
            id: claims.sub,
            login: claims.login,
            email: claims.email,
            role: claims.role,
        }),
    ))
}
