//! New entry use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

/// Service for creating the entry of a given day
pub struct NewEntryService {
    repository: FileSystemRepository,
}

impl NewEntryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        NewEntryService { repository }
    }

    /// Create `<date>/<date>.md`.
    ///
    /// The new entry starts as a copy of the latest existing entry, or as
    /// the default template in the configured style when there is none.
    /// An existing entry for that day is never overwritten.
    pub fn execute(&self, date: NaiveDate) -> Result<PathBuf> {
        let config = self.repository.load_config()?;
        let name = date.format("%Y-%m-%d").to_string();

        let contents = match self.repository.latest_entry()? {
            Some(latest) => {
                info!(from = %latest, "seeding entry from latest");
                self.repository.read_entry(&latest)?
            }
            None => Entry::template(config.style).export(),
        };

        let path = self.repository.entry_path(&name);
        self.repository.safe_write(&path, contents.as_bytes())?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Style;
    use crate::error::DevjError;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn setup(style: Style) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(style)).unwrap();
        (temp, repo)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_entry_uses_template() {
        let (temp, repo) = setup(Style::Pound);
        let service = NewEntryService::new(repo);

        let path = service.execute(date(2019, 1, 2)).unwrap();

        assert_eq!(path, temp.path().join("2019-01-02").join("2019-01-02.md"));
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "# Do\n\n\n\n# Learn\n\n\n"
        );
    }

    #[test]
    fn test_first_entry_follows_configured_style() {
        let (_temp, repo) = setup(Style::Underline);
        let service = NewEntryService::new(repo);

        let path = service.execute(date(2019, 1, 2)).unwrap();
        let entry = Entry::parse(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(entry.style, Style::Underline);
    }

    #[test]
    fn test_new_entry_copies_latest() {
        let (_temp, repo) = setup(Style::Pound);
        let latest = "# Do\n\ncarry this over\n";
        repo.safe_write(&repo.entry_path("2019-01-01"), latest.as_bytes())
            .unwrap();
        let service = NewEntryService::new(repo.clone());

        service.execute(date(2019, 1, 2)).unwrap();

        assert_eq!(repo.read_entry("2019-01-02").unwrap(), latest);
    }

    #[test]
    fn test_existing_entry_is_not_overwritten() {
        let (_temp, repo) = setup(Style::Pound);
        let service = NewEntryService::new(repo.clone());
        service.execute(date(2019, 1, 2)).unwrap();

        let result = service.execute(date(2019, 1, 2));
        assert!(matches!(result, Err(DevjError::EntryExists(_))));
    }
}
