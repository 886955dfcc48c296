use secrecy::Secret;
use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginDto {
    pub login: String,
    pub password: Secret<String>,
}

/// Request body for `POST /auth/register-request`.
///
/// The password is wrapped in `Secret` so it never appears in logs or debug
/// output; only its argon2 hash ever leaves this process.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequestDto {
    pub login: String,
    pub email: String,
    pub password: Secret<String>,
    pub want_to_be_operator: bool,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionUserDto {
    pub id: i32,
    pub login: String,
    pub email: String,
    pub role: String,
}

/// Payload of the client-readable `User` marker cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserCookieDto {
    pub role: String,
    pub id: i32,
}
