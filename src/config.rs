use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEV_SESSION_SECRET: &str = "dev_session_secret_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_secret: SecretString,
    pub session_expiration_hours: i64,
    pub cookie_secure: bool,
    pub cors_origin: String,
    pub environment: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "anatomy-learning".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            session_secret: SecretString::from(DEV_SESSION_SECRET.to_string()),
            session_expiration_hours: 24,
            cookie_secure: false,
            cors_origin: "http://localhost:3000".to_string(),
            environment: "development".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            mongo_conn_string: env::var("MONGODB_URI").unwrap_or(defaults.mongo_conn_string),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or(defaults.mongo_db_name),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            session_secret: env::var("SESSION_SECRET")
                .map(SecretString::from)
                .unwrap_or(defaults.session_secret),
            session_expiration_hours: env::var("SESSION_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(defaults.session_expiration_hours),
            cookie_secure: env::var("COOKIE_SECURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cookie_secure),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            environment: env::var("APP_ENV").unwrap_or(defaults.environment),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Rejects configuration that must never reach a production deployment.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let secret = self.session_secret.expose_secret();

        if secret == DEV_SESSION_SECRET {
            return Err(AppError::InternalError(
                "SESSION_SECRET is using the default value. Set it to a secure random string."
                    .to_string(),
            ));
        }

        if secret.len() < 32 {
            return Err(AppError::InternalError(format!(
                "SESSION_SECRET is too short ({}). Must be at least 32 characters.",
                secret.len()
            )));
        }

        if self.session_expiration_hours <= 0 {
            return Err(AppError::InternalError(
                "SESSION_EXPIRATION_HOURS must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
