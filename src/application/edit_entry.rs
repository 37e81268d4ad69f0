//! Edit entry use case

use crate::error::{DevjError, Result};
use crate::infrastructure::{EditorSession, FileSystemRepository, JournalRepository};
use std::path::PathBuf;

/// Service for editing the latest entry
pub struct EditEntryService {
    repository: FileSystemRepository,
}

impl EditEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        EditEntryService { repository }
    }

    /// Path of the entry `execute` would open
    pub fn target(&self) -> Result<PathBuf> {
        let latest = self.repository.latest_entry()?.ok_or(DevjError::NoEntry)?;
        Ok(self.repository.entry_path(&latest))
    }

    /// Open the latest entry in the configured editor and wait for it.
    pub fn execute(&self) -> Result<PathBuf> {
        let config = self.repository.load_config()?;
        let path = self.target()?;

        EditorSession::new(config.get_editor()).edit(&path)?;
        Ok(path)
    }
}
