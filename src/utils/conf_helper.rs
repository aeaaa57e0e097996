use std::env;
use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;
use tokio::fs;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::models::service_model::ServiceConfig;

pub const DEFAULT_CONFIG_PATH: &str = "usage.json";
pub const CONFIG_PATH_ENV: &str = "USAGE_CONFIG";
pub const PORT_ENV: &str = "PORT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File read error: {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Bind failed on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
}

/// Read the JSON config at `path`. A missing file yields defaults.
pub async fn load_config(path: impl AsRef<Path>) -> Result<ServiceConfig, ConfigError> {
    let path = path.as_ref();

    let data = match fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("{} not found, using defaults", path.display());
            return Ok(ServiceConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source: e,
            })
        }
    };

    Ok(serde_json::from_str(&data)?)
}

/// Apply a `PORT` override on top of the file config.
pub fn apply_port_override(
    mut config: ServiceConfig,
    port: Option<String>,
) -> Result<ServiceConfig, ConfigError> {
    if let Some(raw) = port {
        config.connection.port = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
    }
    Ok(config)
}

/// Load config from the environment, bind the listener, and patch the
/// actual port into the returned config (port 0 binds an ephemeral port).
pub async fn init_config_and_bind() -> Result<(ServiceConfig, TcpListener), ConfigError> {
    let file_path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let config = load_config(&file_path).await?;
    let mut config = apply_port_override(config, env::var(PORT_ENV).ok())?;

    let bind_addr = format!("{}:{}", config.connection.ip, config.connection.port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ConfigError::Bind {
            addr: bind_addr.clone(),
            source: e,
        })?;

    let actual_port = listener
        .local_addr()
        .map_err(|e| ConfigError::Bind {
            addr: bind_addr,
            source: e,
        })?
        .port();

    config.connection.port = actual_port;

    info!("Config initialized with port: {}", actual_port);

    Ok((config, listener))
}
