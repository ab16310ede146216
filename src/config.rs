//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_SITE_DIR: &str = "website";
pub const DEFAULT_PKG_DIR: &str = "widget/pkg";
pub const DEFAULT_KNOWLEDGE_BASE_FILE: &str = "dados.txt";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Directory holding the host page and its assets.
    pub site_dir: PathBuf,
    /// Directory holding the compiled widget bundle, served at `/pkg`.
    pub pkg_dir: PathBuf,
    pub knowledge_base_file: PathBuf,
}

impl ServerConfig {
    /// Build the config from `HOST`, `PORT`, `SITE_DIR`, `PKG_DIR` and
    /// `KNOWLEDGE_BASE_FILE`, each optional.
    ///
    /// # Errors
    ///
    /// Returns an error if `HOST` or `PORT` is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("HOST") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "HOST", value: raw })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            host,
            port,
            site_dir: env_path("SITE_DIR", DEFAULT_SITE_DIR),
            pkg_dir: env_path("PKG_DIR", DEFAULT_PKG_DIR),
            knowledge_base_file: env_path("KNOWLEDGE_BASE_FILE", DEFAULT_KNOWLEDGE_BASE_FILE),
        })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key).map_or_else(|_| PathBuf::from(default), PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
