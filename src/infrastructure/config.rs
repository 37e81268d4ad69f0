//! Configuration management

use crate::domain::{PublicSections, Style};
use crate::error::{DevjError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_editor")]
    pub editor: String,

    #[serde(default)]
    pub style: Style,

    /// Titles of the sections that may be exported, matched ignoring case
    #[serde(default)]
    pub public_sections: Vec<String>,

    /// Where `devj sync` posts the journal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| "vim".to_string())
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Style::Pound)
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new(style: Style) -> Self {
        Config {
            editor: default_editor(),
            style,
            public_sections: Vec::new(),
            url: None,
            user: None,
        }
    }

    /// Load config from .devj/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".devj").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DevjError::NotJournalDirectory(path.to_path_buf())
            } else {
                DevjError::io(&config_path, e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .devj/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let devj_dir = path.join(".devj");
        let config_path = devj_dir.join("config.toml");

        if !devj_dir.exists() {
            fs::create_dir(&devj_dir).map_err(|e| DevjError::io(&devj_dir, e))?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents).map_err(|e| DevjError::io(&config_path, e))?;

        Ok(())
    }

    /// Get the editor command. The configured one wins; the environment
    /// only fills in when it is blank.
    pub fn get_editor(&self) -> String {
        if !self.editor.trim().is_empty() {
            return self.editor.clone();
        }
        default_editor()
    }

    pub fn public_sections(&self) -> PublicSections {
        PublicSections::new(&self.public_sections)
    }
}
