// ABOUTME: Server configuration from environment variables
// ABOUTME: Port, CORS origin, database URL, and token signing settings

use std::env;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("JWT_SECRET must be set")]
    MissingJwtSecret,
}

#[derive(Debug)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_issuer: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port_str = env::var("PORT").unwrap_or_else(|_| "4000".to_string());
        let port = port_str.parse::<u16>()?;
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://givebridge.db".to_string());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingJwtSecret)?;

        let jwt_issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "givebridge".to_string());

        Ok(Self {
            port,
            cors_origin,
            database_url,
            jwt_secret,
            jwt_issuer,
        })
    }
}
