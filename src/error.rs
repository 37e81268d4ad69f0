//! Error types for devj

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for devj
#[derive(Debug, Error)]
pub enum DevjError {
    #[error("entry is empty")]
    EmptyInput,

    #[error("entries must start with a title")]
    MissingTitle,

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoBare(#[from] std::io::Error),

    #[error("Not a devj directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Entry already exists: {0}")]
    EntryExists(PathBuf),

    #[error("No entry to edit")]
    NoEntry,

    #[error("Invalid name: '{0}'")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Sync error: {0}")]
    Sync(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DevjError {
    /// Attach the offending path to an IO error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DevjError::Io {
            path: path.into(),
            source,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DevjError::NotJournalDirectory(_) => 2,
            DevjError::EmptyInput | DevjError::MissingTitle => 3,
            DevjError::Sync(_) | DevjError::Http(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DevjError::NotJournalDirectory(path) => {
                format!(
                    "Not a devj directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'devj init' in this directory to create a new journal\n\
                    • Navigate to an existing devj directory\n\
                    • Set DEVJ_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DevjError::MissingTitle => {
                format!(
                    "{}\n\n\
                    An entry must open with a heading in one of two styles:\n\
                    • '# Title' on the first line\n\
                    • 'Title' followed by a line of '=' characters",
                    self
                )
            }
            DevjError::EntryExists(path) => {
                format!(
                    "Entry already exists: {}\n\n\
                    Use 'devj edit' to open the latest entry instead",
                    path.display()
                )
            }
            DevjError::NoEntry => "No entry to edit\n\n\
                Create one first with 'devj new'"
                .to_string(),
            DevjError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: devj config editor 'vim'",
                    msg
                )
            }
            DevjError::Sync(msg) => {
                format!(
                    "{}\n\n\
                    Example: devj sync --url https://example.com/journal --user me --password secret\n\
                    The user and password can also come from DEVJ_USER and DEVJ_PASSWORD",
                    msg
                )
            }
            DevjError::Config(msg) if msg.contains("Invalid style") => {
                format!(
                    "{}\n\n\
                    Valid styles: pound, underline\n\
                    Example: devj config style underline",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DevjError
pub type Result<T> = std::result::Result<T, DevjError>;
