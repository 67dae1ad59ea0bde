// ArticleView Config Engine
// Loads and saves the application shell config (window, content source, logging).
// The config is a JSON file in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::config::AppConfig;
use crate::types::errors::ConfigError;

const APP_DIR: &str = "articleview";
const CONFIG_FILE: &str = "config.json";

/// Trait defining the config engine interface.
pub trait ConfigEngineTrait {
    fn load(&mut self) -> Result<AppConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get_config(&self) -> &AppConfig;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), ConfigError>;
    fn reset(&mut self) -> Result<(), ConfigError>;
    fn get_config_path(&self) -> &Path;
}

/// Config engine persisting [`AppConfig`] as pretty-printed JSON.
pub struct ConfigEngine {
    config_path: PathBuf,
    config: AppConfig,
}

/// Default config location: `<config dir>/articleview/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

impl ConfigEngine {
    /// Creates a ConfigEngine at `path_override`, or at [`default_config_path`].
    pub fn new(path_override: Option<PathBuf>) -> Self {
        Self {
            config_path: path_override.unwrap_or_else(default_config_path),
            config: AppConfig::default(),
        }
    }
}

impl ConfigEngineTrait for ConfigEngine {
    /// Missing file yields defaults; a malformed file is an error.
    fn load(&mut self) -> Result<AppConfig, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            self.config = AppConfig::default();
            return Ok(self.config.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.config = config;
        Ok(self.config.clone())
    }

    fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_config(&self) -> &AppConfig {
        &self.config
    }

    /// Updates one value by dot-notation path (`"window.width"`) and saves.
    ///
    /// The edited JSON is deserialized back into `AppConfig`, so a value of
    /// the wrong type is rejected and the in-memory config is left unchanged.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::InvalidValue("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.config).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        let parts: Vec<&str> = key.split('.').collect();
        let (last, parents) = parts
            .split_last()
            .ok_or_else(|| ConfigError::InvalidValue("Key cannot be empty".to_string()))?;

        let mut current = &mut json_value;
        for part in parents {
            current = current
                .get_mut(*part)
                .ok_or_else(|| ConfigError::InvalidValue(format!("Key '{}' not found", key)))?;
        }
        match current {
            serde_json::Value::Object(map) if map.contains_key(*last) => {
                map.insert(last.to_string(), value);
            }
            _ => {
                return Err(ConfigError::InvalidValue(format!("Key '{}' not found", key)));
            }
        }

        let new_config: AppConfig = serde_json::from_value(json_value).map_err(|e| {
            ConfigError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.config = new_config;
        self.save()
    }

    fn reset(&mut self) -> Result<(), ConfigError> {
        self.config = AppConfig::default();
        self.save()
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
