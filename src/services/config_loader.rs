// Tab history configuration loader
// Reads `HistoryConfig` from a JSON file at an explicit path, the path named by
// `TABHISTORY_CONFIG`, or `history.json` in the platform config directory.

use std::fs;
use std::path::Path;

use log::info;

use crate::platform;
use crate::types::config::HistoryConfig;
use crate::types::errors::ConfigError;

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TABHISTORY_CONFIG";

/// Trait defining the config loader interface.
pub trait ConfigLoaderTrait {
    fn load(&mut self) -> Result<HistoryConfig, ConfigError>;
    fn get_config(&self) -> &HistoryConfig;
    fn get_config_path(&self) -> &str;
}

/// Loads history configuration from a JSON file on disk.
pub struct ConfigLoader {
    config_path: String,
    config: HistoryConfig,
}

impl ConfigLoader {
    /// Creates a loader.
    ///
    /// If `path_override` is `Some`, that path is used. Otherwise `TABHISTORY_CONFIG`
    /// is consulted, then the platform config directory.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok())
            .unwrap_or_else(|| {
                platform::get_config_dir()
                    .join("history.json")
                    .to_string_lossy()
                    .to_string()
            });

        Self {
            config_path,
            config: HistoryConfig::default(),
        }
    }

    fn validate(config: &HistoryConfig) -> Result<(), ConfigError> {
        if config.max_entries == 0 {
            return Err(ConfigError::InvalidValue(
                "max_entries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl ConfigLoaderTrait for ConfigLoader {
    /// Loads the config file.
    ///
    /// A missing file yields defaults. A malformed file is a parse error and
    /// leaves the previously loaded config in place.
    fn load(&mut self) -> Result<HistoryConfig, ConfigError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.config = HistoryConfig::default();
            return Ok(self.config.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        let config: HistoryConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))?;
        Self::validate(&config)?;

        info!(
            "loaded history config from {} (max_entries={}, dedupe={})",
            self.config_path, config.max_entries, config.dedupe_consecutive
        );
        self.config = config;
        Ok(self.config.clone())
    }

    fn get_config(&self) -> &HistoryConfig {
        &self.config
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
