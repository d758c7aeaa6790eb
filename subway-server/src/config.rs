//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the network JSON file.
pub const NETWORK_VAR: &str = "SUBWAY_NETWORK";

/// Environment variable naming the listen address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

const DEFAULT_NETWORK: &str = "data/network.json";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Error from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SUBWAY_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Network file to load at startup.
    pub network_path: PathBuf,

    /// Address to listen on.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `SUBWAY_NETWORK` and `SUBWAY_ADDR`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(NETWORK_VAR).ok(),
            std::env::var(ADDR_VAR).ok(),
        )
    }

    /// Build a config from optional raw values. Empty strings count as unset.
    pub fn from_values(
        network_path: Option<String>,
        addr: Option<String>,
    ) -> Result<Self, ConfigError> {
        let network_path = network_path
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_NETWORK.to_string());

        let addr = addr
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr { value: addr, source })?;

        Ok(Self {
            network_path: PathBuf::from(network_path),
            addr,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from(DEFAULT_NETWORK),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ServerConfig::from_values(None, None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.network_path, PathBuf::from("data/network.json"));
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn empty_values_use_defaults() {
        let config = ServerConfig::from_values(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn custom_values() {
        let config = ServerConfig::from_values(
            Some("/srv/subway/network.json".to_string()),
            Some("0.0.0.0:8080".to_string()),
        )
        .unwrap();
        assert_eq!(config.network_path, PathBuf::from("/srv/subway/network.json"));
        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_values(None, Some("not-an-addr".to_string())).unwrap_err();
        assert!(err.to_string().starts_with("invalid SUBWAY_ADDR \"not-an-addr\""));
    }
}
