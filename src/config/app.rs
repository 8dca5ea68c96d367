//! Application configuration loaded from config.toml
//!
//! Every key is optional. When no file exists at the default location the
//! built-in defaults are used; a path named explicitly through
//! `DASHBOARD_CONFIG` must exist.

use crate::{
    config::seed::{self, Seed},
    core::store::StoreMode,
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "DASHBOARD_CONFIG";

/// Configuration file used when `DASHBOARD_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How update/delete report a missing id
    pub mode: StoreMode,
    /// Seed file replacing the built-in fixtures
    pub seed_path: Option<PathBuf>,
    /// Rows in the recent transactions list
    pub recent_transactions: usize,
    /// Rows per table page
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: StoreMode::Lenient,
            seed_path: None,
            recent_transactions: 5,
            page_size: 10,
        }
    }
}

impl AppConfig {
    /// Seed records named by this configuration, or the built-in ones.
    pub fn load_seed(&self) -> Result<Seed> {
        match &self.seed_path {
            Some(path) => seed::load_seed(path),
            None => seed::default_seed(),
        }
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse configuration: {e}"),
    })?;
    if config.page_size == 0 {
        return Err(Error::Config {
            message: "page_size must be at least 1".to_string(),
        });
    }
    Ok(config)
}

/// Loads configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Resolves and loads the application configuration.
///
/// Uses the file named by `DASHBOARD_CONFIG` if set, otherwise
/// `config.toml` if present, otherwise defaults.
pub fn load_app_configuration() -> Result<AppConfig> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        info!("Loading configuration from {CONFIG_ENV_VAR}={path}");
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("Loading configuration from {DEFAULT_CONFIG_PATH}");
        return load_config(DEFAULT_CONFIG_PATH);
    }

    info!("No configuration file found, using defaults");
    Ok(AppConfig::default())
}
