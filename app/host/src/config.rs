//! FILENAME: app/host/src/config.rs
// PURPOSE: Application configuration loaded from a JSON file.
// CONTEXT: Every field has a default, so a missing file or a partial file
// both produce a usable config. The path comes from `CALC_CONFIG`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use engine::EngineOptions;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "CALC_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown log level: {0:?}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Unified log file. `None` logs to stderr only.
    pub log_file: Option<PathBuf>,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
    /// Options handed to every new calculator session.
    pub engine: EngineOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_file: None,
            log_level: "info".to_string(),
            engine: EngineOptions::default(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
            Err(source) => {
                return Err(ConfigError::Io { path: path.to_path_buf(), source });
            }
        };

        let config: AppConfig = serde_json::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.level_filter()?;
        Ok(config)
    }

    /// Load from the file named by `CALC_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => AppConfig::load(Path::new(&path)),
            None => Ok(AppConfig::default()),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
