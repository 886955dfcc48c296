mod registration;

use secrecy::Secret;
use url::Url;
use wiremock::MockServer;

use crate::server::{mail::EmailClient, service::token::TokenService};

fn token_service() -> TokenService {
    TokenService::new(&Secret::new("service-test-secret".to_string()))
}

fn email_client(mock_server: &MockServer) -> EmailClient {
    EmailClient::new(
        mock_server.uri(),
        "noreply@example.com".to_string(),
        Secret::new("mail-token".to_string()),
        3,
    )
    .unwrap()
}

fn app_url() -> Url {
    Url::parse("http://localhost:3000").unwrap()
}
