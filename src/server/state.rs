//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Mail client for dispatching activation emails
//! - Token service for signing and verifying activation and session tokens
//! - Application URL for generating activation links

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{mail::EmailClient, service::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `EmailClient` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `TokenService` holds pre-built signing keys
/// - `Url` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Mail client for dispatching activation emails.
    ///
    /// Configured with a request timeout; a dispatch failure is terminal for
    /// the registration request that triggered it.
    pub email_client: EmailClient,

    /// Token service for activation and session tokens.
    ///
    /// Signs and verifies the HS256 tokens that carry pending registrations
    /// and authenticated sessions.
    pub tokens: TokenService,

    /// Application base URL for generating links.
    ///
    /// Used to construct the activation links embedded in registration emails.
    pub app_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `email_client` - Mail client for activation emails
    /// - `tokens` - Token service for signing and verification
    /// - `app_url` - Application base URL
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        email_client: EmailClient,
        tokens: TokenService,
        app_url: Url,
    ) -> Self {
        Self {
            db,
            email_client,
            tokens,
            app_url,
        }
    }
}
