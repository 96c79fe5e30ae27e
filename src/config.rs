use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_MAX_RECONNECT_ATTEMPTS: u32 = 5;
const DEFAULT_RECONNECT_INTERVAL: Duration = Duration::from_secs(5);

pub struct Config {
    pub discord_token: String,

    /// Key for the map rotation API, the `apexmap` command explains itself when missing.
    pub apex_api_key: Option<String>,

    pub store: StoreConfig,
}

/// Connection settings for the voice log store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// `None` disables voice logging entirely.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    /// Upper bound on reconnect attempts after the store drops.
    pub max_reconnect_attempts: u32,
    /// Base delay between reconnect attempts, multiplied by the attempt number.
    pub reconnect_interval: Duration,
}

impl StoreConfig {
    /// Store settings with defaults for everything but the URL.
    pub fn new(database_url: Option<String>) -> Self {
        Self {
            database_url,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_reconnect_attempts: DEFAULT_MAX_RECONNECT_ATTEMPTS,
            reconnect_interval: DEFAULT_RECONNECT_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset so a blank line in `.env` does not enable a
    /// feature with an empty key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut store = StoreConfig::new(get("DATABASE_URL"));
        if let Some(attempts) = get("STORE_MAX_RECONNECT_ATTEMPTS") {
            store.max_reconnect_attempts = parse_var("STORE_MAX_RECONNECT_ATTEMPTS", &attempts)?;
        }
        if let Some(secs) = get("STORE_RECONNECT_INTERVAL_SECS") {
            store.reconnect_interval =
                Duration::from_secs(parse_var("STORE_RECONNECT_INTERVAL_SECS", &secs)?);
        }

        Ok(Self {
            discord_token: get("DISCORD_TOKEN")
                .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?,
            apex_api_key: get("APEX_STATUS_API_KEY"),
            store,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        })
}
