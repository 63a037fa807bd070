use std::env;
use std::fmt;

use thiserror::Error;

pub const DEFAULT_BITUNIX_BASE_URL: &str = "https://fapi.bitunix.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("PORT must be a number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// Broker credentials and endpoint, fixed for the lifetime of the process.
#[derive(Clone)]
pub struct BitunixConfig {
    pub api_key: String,
    pub secret_key: String,
    pub base_url: String,
}

impl fmt::Debug for BitunixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitunixConfig")
            .field("api_key", &"<redacted>")
            .field("secret_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,

    // shared secret the alert source puts in every payload
    pub webhook_token: String,

    pub bitunix: BitunixConfig,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("webhook_token", &"<redacted>")
            .field("bitunix", &self.bitunix)
            .finish()
    }
}

pub fn load() -> Result<Settings, ConfigError> {
    // Loads .env if present (no crash if missing)
    dotenvy::dotenv().ok();

    load_from(|key| env::var(key).ok())
}

/// Builds settings from an arbitrary variable source.
pub fn load_from<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &'static str| -> Result<String, ConfigError> {
        lookup(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(key))
    };

    let webhook_token = required("TRADINGVIEW_TOKEN")?;
    let api_key = required("BITUNIX_API_KEY")?;
    let secret_key = required("BITUNIX_API_SECRET")?;

    let base_url = lookup("BITUNIX_BASE_URL")
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_BITUNIX_BASE_URL.to_string());

    let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

    let port = match lookup("PORT") {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw))?,
        None => 3000,
    };

    Ok(Settings {
        host,
        port,
        webhook_token,
        bitunix: BitunixConfig {
            api_key,
            secret_key,
            base_url,
        },
    })
}
