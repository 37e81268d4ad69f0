//! Config management use case

use crate::domain::Style;
use crate::error::{DevjError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: &[&str] = &["editor", "style", "public_sections", "url", "user"];

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        value_of(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => config.editor = value.to_string(),
            "style" => {
                config.style = Style::from_name(value)
                    .ok_or_else(|| DevjError::Config(format!("Invalid style: '{}'", value)))?;
            }
            "public_sections" => {
                config.public_sections = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "url" => config.url = non_empty(value),
            "user" => config.user = non_empty(value),
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

/// Display form of one config value
pub fn value_of(config: &Config, key: &str) -> Result<String> {
    match key {
        "editor" => Ok(config.editor.clone()),
        "style" => Ok(config.style.as_str().to_string()),
        "public_sections" => Ok(config.public_sections.join(", ")),
        "url" => Ok(config.url.clone().unwrap_or_default()),
        "user" => Ok(config.user.clone().unwrap_or_default()),
        _ => Err(unknown_key(key)),
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn unknown_key(key: &str) -> DevjError {
    DevjError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}
