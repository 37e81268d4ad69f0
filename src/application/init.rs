//! Initialize journal use case

use crate::domain::Style;
use crate::error::{DevjError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, style: Style) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| DevjError::io(path, e))?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new(style))?;

    println!("Initialized devj journal at {}", path.display());
    println!("Style: {}", style.as_str());

    Ok(())
}
