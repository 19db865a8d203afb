//! Service configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `JOURNAL_*` environment variables over an
//! optional configuration file.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Listener address used when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Pool size used when none is configured.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
}

/// Top-level service settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "JOURNAL")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Storage is in-memory when absent.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Create the demo users at startup.
    #[ortho_config(default = false)]
    pub seed_demo_users: bool,
}

impl AppSettings {
    /// Parsed bind address, falling back to [`DEFAULT_BIND_ADDR`].
    ///
    /// # Errors
    /// Returns [`SettingsError::BindAddr`] when the configured value does
    /// not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to [`DEFAULT_DB_MAX_CONNECTIONS`].
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }
}
