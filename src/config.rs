use anyhow::{Context, Result};
use http::HeaderValue;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://worklog.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct WorklogConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
    /// The single browser origin allowed to call the API.
    pub cors_origin: HeaderValue,
}

impl WorklogConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = lookup("MAX_CONNECTIONS")
            .and_then(|val| val.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let raw_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = raw_address
            .parse::<SocketAddr>()
            .with_context(|| format!("BIND_ADDRESS '{}' is not a socket address", raw_address))?;

        let raw_origin = lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(&raw_origin)
            .with_context(|| format!("CORS_ORIGIN '{}' is not a valid header value", raw_origin))?;

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
            cors_origin,
        })
    }
}
