//! Password hashing and verification.
//!
//! Passwords are hashed with argon2id into PHC string format. Both hashing and
//! verification run on the blocking thread pool so the adaptive cost does not
//! stall the async runtime.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use secrecy::{ExposeSecret, Secret};

use crate::server::error::{auth::AuthError, AppError};

/// PHC hash verified when the login does not match any account.
///
/// Verifying against this constant keeps login timing uniform whether or not
/// the account exists; it never matches a real password.
const DUMMY_PASSWORD_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$\
    gZiV/M1gPc22ElAH/Jh1Hw$CWOrkoo7oJBQ/iyh7uJ0LO2aLEfrHwTWllSAxT0zRno";

/// Returns the fallback hash used for nonexistent accounts.
pub fn dummy_password_hash() -> Secret<String> {
    Secret::new(DUMMY_PASSWORD_HASH.to_string())
}

/// Hashes a password into PHC string format.
///
/// # Arguments
/// - `password` - Plaintext password to hash
///
/// # Returns
/// - `Ok(String)` - Argon2id hash in PHC string format
/// - `Err(AppError::InternalError)` - Hashing or task scheduling failed
#[tracing::instrument(name = "Compute password hash", skip(password))]
pub async fn compute_password_hash(password: Secret<String>) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Failed to spawn blocking task: {}", e)))?
}

/// Verifies a candidate password against a stored PHC hash.
///
/// # Arguments
/// - `expected_password_hash` - Stored hash in PHC string format
/// - `password_candidate` - Plaintext candidate to verify
///
/// # Returns
/// - `Ok(())` - Candidate matches the stored hash
/// - `Err(AppError::AuthErr(InvalidCredentials))` - Candidate does not match
/// - `Err(AppError::InternalError)` - Stored hash unparsable or task
///   scheduling failed
#[tracing::instrument(
    name = "Verify password hash",
    skip(expected_password_hash, password_candidate)
)]
pub async fn verify_password(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<(), AppError> {
    tokio::task::spawn_blocking(move || {
        verify_password_hash(expected_password_hash, password_candidate)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Failed to spawn blocking task: {}", e)))?
}

fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<(), AppError> {
    let expected_password_hash = PasswordHash::new(expected_password_hash.expose_secret())
        .map_err(|e| {
            AppError::InternalError(format!("Failed to parse hash in PHC string format: {}", e))
        })?;

    Argon2::default()
        .verify_password(
            password_candidate.expose_secret().as_bytes(),
            &expected_password_hash,
        )
        .map_err(|_| AuthError::InvalidCredentials.into())
}
