//! File system repository

use crate::error::{DevjError, Result};
use crate::infrastructure::Config;
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;
use walkdir::WalkDir;

/// Extension of the entry file inside each entry directory
pub const ENTRY_EXTENSION: &str = "md";

/// Entry directories named like 2019-01-02
fn date_dir_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .devj/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .devj/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .devj directory exists
    fn is_initialized(&self) -> bool;

    /// Create .devj directory structure
    fn initialize(&self) -> Result<()>;

    /// Names of the entry directories directly under the root
    fn list_entry_dirs(&self) -> Result<Vec<String>>;

    /// Names of the files (not directories) directly inside `dir`
    fn list_files(&self, dir: &Path) -> Result<Vec<String>>;

    /// Read a whole file
    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Path of the entry file for an entry name: `<root>/<name>/<name>.md`
    fn entry_path(&self, name: &str) -> PathBuf {
        self.root()
            .join(name)
            .join(format!("{}.{}", name, ENTRY_EXTENSION))
    }
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks DEVJ_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DEVJ_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_devj_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DevjError::Config(format!(
                    "DEVJ_ROOT is set to '{}' but no .devj directory found. \
                    Run 'devj init' in that directory or unset DEVJ_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_devj_dir(&current) {
                debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(DevjError::NotJournalDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_devj_dir(path: &Path) -> bool {
        path.join(".devj").is_dir()
    }

    /// Immediate children of `dir`, sorted by name
    fn children(dir: &Path) -> Result<Vec<walkdir::DirEntry>> {
        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .map(|entry| entry.map_err(|e| DevjError::io(dir, e.into())))
            .collect()
    }
}

/// Entry and file names must be valid UTF-8 to appear in a journal.
fn utf8_name(entry: &walkdir::DirEntry) -> Result<String> {
    entry
        .file_name()
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| DevjError::InvalidName(entry.file_name().to_string_lossy().into_owned()))
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_devj_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let devj_dir = self.root.join(".devj");

        if devj_dir.exists() {
            return Err(DevjError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&devj_dir).map_err(|e| DevjError::io(&devj_dir, e))?;
        Ok(())
    }

    fn list_entry_dirs(&self) -> Result<Vec<String>> {
        let dirs = Self::children(&self.root)?
            .into_iter()
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| utf8_name(&entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(dirs.into_iter().filter(|name| !name.starts_with('.')).collect())
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
        let files = Self::children(dir)?
            .into_iter()
            .filter(|entry| !entry.file_type().is_dir())
            .map(|entry| utf8_name(&entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }
}

// Entry file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Name of the newest dated entry that has an entry file, if any
    pub fn latest_entry(&self) -> Result<Option<String>> {
        let latest = self
            .list_entry_dirs()?
            .into_iter()
            .filter(|name| date_dir_regex().is_match(name))
            .filter(|name| self.entry_path(name).is_file())
            .next_back();
        Ok(latest)
    }

    /// Read an entry file as text
    pub fn read_entry(&self, name: &str) -> Result<String> {
        let path = self.entry_path(name);
        fs::read_to_string(&path).map_err(|e| DevjError::io(&path, e))
    }

    /// Write a file, creating parent directories, but never overwrite one.
    pub fn safe_write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| DevjError::io(parent, e))?;
            }
        }

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    DevjError::EntryExists(path.to_path_buf())
                } else {
                    DevjError::io(path, e)
                }
            })?;

        file.write_all(contents)
            .map_err(|e| DevjError::io(path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}
