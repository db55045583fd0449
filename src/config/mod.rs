use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::errors::WorkbenchError;

pub const BASE_URL_VAR: &str = "LM_STUDIO_BASE_URL";
pub const DATA_DIR_VAR: &str = "WORKBENCH_DATA_DIR";
pub const HOST_VAR: &str = "WORKBENCH_HOST";
pub const PORT_VAR: &str = "WORKBENCH_PORT";
pub const CONNECT_TIMEOUT_VAR: &str = "WORKBENCH_CONNECT_TIMEOUT_SECS";
pub const READ_TIMEOUT_VAR: &str = "WORKBENCH_READ_TIMEOUT_SECS";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub base_url: String,
    pub api_key: String,
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: consts::DEFAULT_BASE_URL.to_string(),
            api_key: consts::PLACEHOLDER_API_KEY.to_string(),
            data_dir: PathBuf::from(consts::DEFAULT_DATA_DIR),
            host: consts::DEFAULT_HOST.to_string(),
            port: consts::SERVER_PORT,
            connect_timeout_secs: consts::CONNECT_TIMEOUT_SECS,
            read_timeout_secs: consts::READ_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

pub trait ConfigLoader: Send + Sync {
    fn load_config(&self) -> Result<Config, WorkbenchError>;
}

/// Reads overrides from the process environment, falling back to defaults.
pub struct EnvConfigLoader;

impl EnvConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for EnvConfigLoader {
    fn load_config(&self) -> Result<Config, WorkbenchError> {
        config_from_lookup(|name| std::env::var(name).ok())
    }
}

pub fn config_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config, WorkbenchError> {
    let mut config = Config::default();

    if let Some(base_url) = lookup(BASE_URL_VAR).filter(|v| !v.trim().is_empty()) {
        config.base_url = base_url.trim().trim_end_matches('/').to_string();
    }
    if let Some(data_dir) = lookup(DATA_DIR_VAR).filter(|v| !v.is_empty()) {
        config.data_dir = PathBuf::from(data_dir);
    }
    if let Some(host) = lookup(HOST_VAR).filter(|v| !v.is_empty()) {
        config.host = host;
    }
    if let Some(port) = lookup(PORT_VAR) {
        config.port = parse_number(PORT_VAR, &port)?;
    }
    if let Some(secs) = lookup(CONNECT_TIMEOUT_VAR) {
        config.connect_timeout_secs = parse_number(CONNECT_TIMEOUT_VAR, &secs)?;
    }
    if let Some(secs) = lookup(READ_TIMEOUT_VAR) {
        config.read_timeout_secs = parse_number(READ_TIMEOUT_VAR, &secs)?;
    }

    Ok(config)
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, WorkbenchError> {
    value
        .trim()
        .parse()
        .map_err(|_| WorkbenchError::ConfigError(format!("{name}: invalid number {value:?}")))
}

pub fn load_config() -> Result<Config, WorkbenchError> {
    let loader = EnvConfigLoader::new();
    loader.load_config()
}
