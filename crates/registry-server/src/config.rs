//! Configuration for the registry service.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Registry storage configuration
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Static asset configuration
    #[serde(default)]
    pub static_assets: StaticAssetsConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Path to the registry document
    #[serde(default = "default_registry_path")]
    pub path: PathBuf,

    /// Enable persistence (if false, the registry is in-memory only)
    #[serde(default = "default_true")]
    pub persist: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticAssetsConfig {
    /// Directory served at the root path
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            path: default_registry_path(),
            persist: true,
        }
    }
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_registry_path() -> PathBuf {
    PathBuf::from("data/registry.json")
}

fn default_true() -> bool {
    true
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Variables use a `__` separator, e.g. `SERVER__PORT=8080` or
    /// `REGISTRY__PATH=/data/registry.json`.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
