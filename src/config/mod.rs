//! Configuration management for compare-size

pub mod schema;

pub use schema::{CompareConfig, Config};

use crate::error::{SizeError, SizeResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "compare-size.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Use `compare-size.toml` in `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config_path: dir.join(LOCAL_CONFIG_FILE),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Load configuration, using defaults if the file does not exist
    pub async fn load(&self) -> SizeResult<Config> {
        if !self.config_path.exists() {
            debug!(
                "Config file {} not found, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> SizeResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| SizeError::io(format!("reading config from {}", path.display()), e))?;

        let config: Config = toml::from_str(&content).map_err(|e| SizeError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}
