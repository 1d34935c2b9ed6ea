//! Configuration loading for Launchdeck.
//! Reads launchdeck.toml from the current directory or path in LAUNCHDECK_CONFIG env var.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3000 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Socket address to bind, from the configured host and port.
    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("Invalid [server].host in config: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the launch records CSV, relative to the working directory.
    #[serde(default = "default_launches_csv")]
    pub launches_csv: String,
}

fn default_launches_csv() -> String { "data/spacex_launches.csv".to_string() }

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            launches_csv: default_launches_csv(),
        }
    }
}

mod tests;

impl Config {
    /// Load configuration from launchdeck.toml.
    /// Checks LAUNCHDECK_CONFIG env var first, then current directory.
    /// A missing file yields the built-in defaults; a file that exists
    /// but does not parse is fatal.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("LAUNCHDECK_CONFIG")
            .unwrap_or_else(|_| "launchdeck.toml".to_string());
        Self::from_path(Path::new(&path))
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
