
use secrecy::Secret;

use crate::server::{model::auth::SessionUser, service::token::TokenService};

fn token_service() -> TokenService {
    TokenService::new(&Secret::new("middleware-test-secret".to_string()))
}

fn session_user() -> SessionUser {
    SessionUser {
        id: 7,
        login: "vermeer".to_string(),
        email: "vermeer@example.com".to_string(),
        role: "basic".to_string(),
    }
}
