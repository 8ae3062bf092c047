//! Server configuration management

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};

/// Backend holding template records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Sqlite,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StoreBackend::Sqlite),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(ApiError::Config(format!(
                "Invalid STORE_BACKEND value: {}",
                other
            ))),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Where templates are persisted
    pub store_backend: StoreBackend,

    /// SQLite connection string
    pub database_url: String,

    /// Kind under which templates are stored
    pub datastore_kind: String,

    /// Directory with the editor client bundle, served for unmatched paths
    pub static_dir: Option<PathBuf>,

    /// JSON array of templates upserted at startup
    pub seed_file: Option<PathBuf>,

    /// Maximum accepted request body size
    pub max_body_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port: match var("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ApiError::Config("Invalid PORT value".to_string()))?,
                None => defaults.port,
            },
            store_backend: match var("STORE_BACKEND") {
                Some(backend) => backend.parse()?,
                None => defaults.store_backend,
            },
            database_url: var("DATABASE_URL").unwrap_or(defaults.database_url),
            datastore_kind: var("DATASTORE_KIND")
                .filter(|kind| !kind.trim().is_empty())
                .unwrap_or(defaults.datastore_kind),
            static_dir: var("STATIC_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            seed_file: var("SEED_FILE")
                .filter(|file| !file.is_empty())
                .map(PathBuf::from),
            max_body_bytes: match var("MAX_BODY_BYTES") {
                Some(limit) => limit
                    .parse()
                    .map_err(|_| ApiError::Config("Invalid MAX_BODY_BYTES value".to_string()))?,
                None => defaults.max_body_bytes,
            },
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            store_backend: StoreBackend::Sqlite,
            database_url: "sqlite:appcreator.db".to_string(),
            datastore_kind: appcreator_store::DEFAULT_KIND.to_string(),
            static_dir: None,
            seed_file: None,
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}
