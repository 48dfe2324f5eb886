use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::services::performance_stats::STATS_STORAGE_KEY;

/// Where answer stats are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// JSON file under `data_dir`.
    File,
    /// Lost on restart.
    Memory,
    /// No storage capability: stats load empty and writes are dropped.
    None,
}

impl FromStr for StorageBackend {
    type Err = config::ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            "none" | "off" => Ok(StorageBackend::None),
            other => Err(config::ConfigError::Message(format!(
                "unknown storage backend '{}', expected file, memory or none",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_addr: String,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub stats_key: String,
    pub metrics_auth: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Override with environment variables, e.g. APP__STATS__STORAGE=memory
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let bind_addr = settings
            .get_string("server.bind_addr")
            .or_else(|_| env::var("BIND_ADDR"))
            .unwrap_or_else(|_| "127.0.0.1:8081".to_string());

        let storage_backend = settings
            .get_string("stats.storage")
            .or_else(|_| env::var("STATS_STORAGE"))
            .map(|value| value.parse::<StorageBackend>())
            .unwrap_or(Ok(StorageBackend::File))?;

        let data_dir = settings
            .get_string("stats.data_dir")
            .or_else(|_| env::var("DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let stats_key = settings
            .get_string("stats.key")
            .unwrap_or_else(|_| STATS_STORAGE_KEY.to_string());

        let metrics_auth = settings
            .get_string("metrics.auth")
            .or_else(|_| env::var("METRICS_AUTH"))
            .or_else(|_| {
                if env == "prod" {
                    return Err(config::ConfigError::Message(
                        "METRICS_AUTH must be set in production".to_string(),
                    ));
                }
                tracing::warn!("Using default METRICS_AUTH (dev mode only!)");
                Ok("admin:changeme".to_string())
            })?;

        Ok(Config {
            bind_addr,
            storage_backend,
            data_dir,
            stats_key,
            metrics_auth,
        })
    }

    /// Ephemeral settings for tests and embedding.
    pub fn in_memory() -> Self {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            storage_backend: StorageBackend::Memory,
            data_dir: PathBuf::from("data"),
            stats_key: STATS_STORAGE_KEY.to_string(),
            metrics_auth: "admin:changeme".to_string(),
        }
    }
}
