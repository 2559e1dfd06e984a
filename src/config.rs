use std::net::SocketAddr;

use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
    pub oauth_callback_url: String,
    pub listen_addr: SocketAddr,
    /// Optional JSON file of constellation templates imported on startup.
    pub star_template_file: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let listen_addr = listen_addr
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("{listen_addr:?} is not a valid socket address"),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            oauth_callback_url: required("OAUTH_CALLBACK_URL")?,
            listen_addr,
            star_template_file: std::env::var("STAR_TEMPLATE_FILE").ok(),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
