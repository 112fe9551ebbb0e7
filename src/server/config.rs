//! Environment configuration loaded once at startup.

use crate::server::error::config::ConfigError;

/// Google OAuth2 endpoints used when no override is configured
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const DEFAULT_PORT: u16 = 3000;

/// Settings for the Google OAuth2 login flow
#[derive(Clone, Debug)]
pub struct GoogleSettings {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

/// Application configuration
///
/// Built from environment variables by [`Config::from_env`] and handed to the startup
/// functions; nothing reads the environment after this point.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub google: GoogleSettings,
    /// Enables `Secure` + `SameSite=None` session cookies
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required = |key: &str| {
            optional(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let port = match optional("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let production = optional("APP_ENV")
            .map(|env| env.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            port,
            admin_username: required("ADMIN_USERNAME")?,
            admin_password: required("ADMIN_PASSWORD")?,
            google: GoogleSettings {
                client_id: required("GOOGLE_CLIENT_ID")?,
                client_secret: required("GOOGLE_CLIENT_SECRET")?,
                callback_url: required("GOOGLE_CALLBACK_URL")?,
                auth_url: optional("GOOGLE_AUTH_URL")
                    .unwrap_or_else(|| GOOGLE_AUTH_URL.to_string()),
                token_url: optional("GOOGLE_TOKEN_URL")
                    .unwrap_or_else(|| GOOGLE_TOKEN_URL.to_string()),
                userinfo_url: optional("GOOGLE_USERINFO_URL")
                    .unwrap_or_else(|| GOOGLE_USERINFO_URL.to_string()),
            },
            production,
        })
    }
}
