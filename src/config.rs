// config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Base address of the listings/bookings API, e.g. "http://localhost:3001/api".
    pub api_base_url: Url,
    pub max_workers: usize,
    /// Timeout applied to every backend request.
    pub api_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = get("RENTALS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_base_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::Invalid {
            name: "RENTALS_API_URL",
            reason: e.to_string(),
        })?;
        if api_base_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid {
                name: "RENTALS_API_URL",
                reason: format!("{api_base_url} cannot be used as a base address"),
            });
        }

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => parse_positive("MAX_WORKERS", &v)? as usize,
            None => DEFAULT_MAX_WORKERS,
        };

        let timeout_secs = match get("API_TIMEOUT_SECS") {
            Some(v) => parse_positive("API_TIMEOUT_SECS", &v)?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            bind_addr,
            api_base_url,
            max_workers,
            api_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        Ok(_) => Err(ConfigError::Invalid {
            name,
            reason: "must be greater than zero".into(),
        }),
        Err(e) => Err(ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}
