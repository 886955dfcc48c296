use secrecy::Secret;
use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAIL_TIMEOUT_SECONDS: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub app_url: Url,
    pub jwt_secret: Secret<String>,

    pub mail_base_url: String,
    pub mail_sender: String,
    pub mail_authorization_token: Secret<String>,
    pub mail_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let app_url = required("APP_URL")?;
        let app_url = Url::parse(&app_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        })?;

        let mail_timeout_seconds = match std::env::var("MAIL_TIMEOUT_SECONDS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
                name: "MAIL_TIMEOUT_SECONDS".to_string(),
                reason: format!("'{}' is not a number of seconds", value),
            })?,
            Err(_) => DEFAULT_MAIL_TIMEOUT_SECONDS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            app_url,
            jwt_secret: Secret::new(required("JWT_SECRET")?),
            mail_base_url: required("MAIL_BASE_URL")?,
            mail_sender: required("MAIL_SENDER")?,
            mail_authorization_token: Secret::new(required("MAIL_AUTHORIZATION_TOKEN")?),
            mail_timeout_seconds,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
