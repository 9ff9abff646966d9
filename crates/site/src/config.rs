use std::net::IpAddr;

use crate::error::ConfigError;

/// Site server configuration loaded from environment variables.
///
/// The API base URLs are not configurable here: each view compiles in its
/// own (see [`crate::state`]).
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
}

impl SiteConfig {
    /// | Env Var     | Default   |
    /// |-------------|-----------|
    /// | `SITE_HOST` | `0.0.0.0` |
    /// | `SITE_PORT` | `3000`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host_raw = lookup("SITE_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host = host_raw.parse().map_err(|_| ConfigError {
            name: "SITE_HOST",
            expected: "an IP address",
            value: host_raw.clone(),
        })?;

        let port_raw = lookup("SITE_PORT").unwrap_or_else(|| "3000".into());
        let port = port_raw.parse().map_err(|_| ConfigError {
            name: "SITE_PORT",
            expected: "a valid u16",
            value: port_raw.clone(),
        })?;

        Ok(Self { host, port })
    }
}
