use std::net::IpAddr;

use axum::http::HeaderValue;

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `*`: any origin, no credentials.
    Any,
    List(Vec<HeaderValue>),
}

/// Startup configuration that could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except the database URL has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Record store connection string: a Postgres URL or `memory://`.
    pub database_url: String,
    /// Parsed from comma-separated `CORS_ORIGINS` (default: `*`).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `DATABASE_URL`         | required  |
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `5000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host_raw = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let host = host_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            expected: "an IP address",
            value: host_raw.clone(),
        })?;

        let port_raw = lookup("PORT").unwrap_or_else(|| "5000".into());
        let port = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            expected: "a valid u16",
            value: port_raw.clone(),
        })?;

        let cors_raw = lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into());
        let cors_origins = parse_cors_origins(&cors_raw)?;

        let timeout_raw = lookup("REQUEST_TIMEOUT_SECS").unwrap_or_else(|| "30".into());
        let request_timeout_secs = timeout_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "REQUEST_TIMEOUT_SECS",
            expected: "a valid u64",
            value: timeout_raw.clone(),
        })?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                expected: "a comma-separated list of origins",
                value: origin.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
