//! Configuration loading and management
//!
//! Settings come from three layers, last one wins:
//! 1. An optional YAML file
//! 2. The `PORT` environment variable
//! 3. Command-line flags (applied by the binary)

use crate::core::ImagePaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

/// Complete service configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which backend serves the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreConfig {
    /// SQLite database file
    Sqlite {
        #[serde(default = "default_database_path")]
        path: PathBuf,
    },
    /// Directory of exported JSON snapshots
    Json {
        #[serde(default = "default_data_dir")]
        dir: PathBuf,
    },
}

/// Static image settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory served under `/public`
    pub public_dir: PathBuf,
    /// URL prefix used in catalog `image` fields
    pub image_base: String,
    pub image_extension: String,
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("./pizza.sqlite")
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Sqlite {
            path: default_database_path(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from("./public"),
            image_base: "/public/pizzas".to_string(),
            image_extension: "webp".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Sqlite { .. } => "sqlite",
            StoreConfig::Json { .. } => "json",
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Replace the port with a raw value, if one is given
    pub fn with_port_override(mut self, raw: Option<&str>) -> Result<Self> {
        if let Some(raw) = raw {
            self.server.port = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {} value '{}'", PORT_ENV, raw))?;
        }
        Ok(self)
    }

    pub fn image_paths(&self) -> ImagePaths {
        ImagePaths::new(&self.assets.image_base, &self.assets.image_extension)
    }
}
