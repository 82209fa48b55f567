use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub whatsapp_number: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// None disables outbound messaging; confirmations are logged instead.
    pub twilio: Option<TwilioConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            Err(_) => 3000,
        };

        let twilio = match (
            env::var("TWILIO_ACCOUNT_SID"),
            env::var("TWILIO_AUTH_TOKEN"),
            env::var("TWILIO_WHATSAPP_NUMBER"),
        ) {
            (Ok(account_sid), Ok(auth_token), Ok(whatsapp_number)) => Some(TwilioConfig {
                account_sid,
                auth_token,
                whatsapp_number,
            }),
            _ => None,
        };

        Ok(Self {
            database_url,
            port,
            twilio,
        })
    }
}
