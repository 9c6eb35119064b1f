//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_SERVICE_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence. The database URL
//! additionally falls back to the conventional `DATABASE_URL` variable.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::{
    DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DEFAULT_MIN_IDLE, PoolConfig,
};

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
/// Port the service listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 3000;
/// Fallback variable consulted when no database URL is configured.
pub const DATABASE_URL_FALLBACK_VAR: &str = "DATABASE_URL";

/// Problems found while turning raw settings into runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind host is not an IP address.
    #[error("bind host {host:?} is not an IP address")]
    InvalidBindHost {
        /// Configured host value.
        host: String,
    },
    /// Neither the setting nor the fallback variable is set.
    #[error("database URL missing: set USER_SERVICE_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// A database URL was given but is blank.
    #[error("{origin} must not be empty")]
    EmptyDatabaseUrl {
        /// Setting or variable the blank value came from.
        origin: &'static str,
    },
    /// Pool sizing is contradictory.
    #[error("pool_min_idle ({min_idle}) exceeds pool_max_size ({max_size})")]
    PoolSizing {
        /// Requested idle connections.
        min_idle: u32,
        /// Pool capacity.
        max_size: u32,
    },
}

impl From<SettingsError> for std::io::Error {
    fn from(value: SettingsError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, value)
    }
}

/// Runtime settings for the user service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServerSettings {
    /// IP address to bind; defaults to every interface.
    pub bind_host: Option<String>,
    /// TCP port; defaults to 3000.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub pool_max_size: Option<u32>,
    /// Idle connections kept warm.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Socket address the HTTP server binds.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST);
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidBindHost {
                host: host.to_owned(),
            })?;
        Ok(SocketAddr::new(ip, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Database URL from settings, falling back to `DATABASE_URL`.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        resolve_database_url(
            self.database_url.clone(),
            env::var(DATABASE_URL_FALLBACK_VAR).ok(),
        )
    }

    /// Pool configuration with defaults filled in.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let max_size = self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE);
        let min_idle = self.pool_min_idle.unwrap_or(DEFAULT_MIN_IDLE.min(max_size));
        if min_idle > max_size {
            return Err(SettingsError::PoolSizing { min_idle, max_size });
        }
        let timeout = self
            .pool_timeout_secs
            .map_or(DEFAULT_CONNECTION_TIMEOUT, Duration::from_secs);

        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(max_size)
            .with_min_idle(Some(min_idle))
            .with_connection_timeout(timeout))
    }
}

fn resolve_database_url(
    explicit: Option<String>,
    fallback: Option<String>,
) -> Result<String, SettingsError> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(SettingsError::EmptyDatabaseUrl {
                origin: "USER_SERVICE_DATABASE_URL",
            });
        }
        return Ok(value);
    }

    let from_env = fallback.ok_or(SettingsError::MissingDatabaseUrl)?;
    if from_env.trim().is_empty() {
        return Err(SettingsError::EmptyDatabaseUrl {
            origin: DATABASE_URL_FALLBACK_VAR,
        });
    }
    Ok(from_env)
}
