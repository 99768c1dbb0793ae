//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI arguments, `CANDIDATES_*` environment variables and
//! an optional configuration file, in increasing order of precedence as
//! OrthoConfig defines it.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use candidate_backend::outbound::persistence::DEFAULT_MAX_SIZE;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind host {host:?}: {source}")]
    InvalidHost {
        host: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration values controlling the HTTP listener and candidate storage.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CANDIDATES")]
pub struct ServerSettings {
    /// Address to bind, defaults to all interfaces.
    pub host: Option<String>,
    /// Port to bind, defaults to 8080.
    pub port: Option<u16>,
    /// PostgreSQL connection string. Without it candidates are kept in memory.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving traffic, defaults to `true`.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidHost`] when `host` is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = match self.host.as_deref() {
            Some(raw) => raw.parse().map_err(|source| SettingsError::InvalidHost {
                host: raw.to_owned(),
                source,
            })?,
            None => DEFAULT_HOST,
        };
        Ok(SocketAddr::new(host, self.port.unwrap_or(DEFAULT_PORT)))
    }

    /// Return the configured pool size, falling back to the pool default.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_MAX_SIZE)
    }

    /// Whether embedded migrations run at startup.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }

    /// Return the database URL when one is configured and not blank.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }
}
