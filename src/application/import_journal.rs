//! Journal import use case
//!
//! Walks the entry directories of a journal and collects their public
//! sections and referenced files into one `Journal`.

use crate::domain::{Entry, Journal, PublicSections};
use crate::error::{DevjError, Result};
use crate::infrastructure::JournalRepository;
use std::io;
use tracing::{debug, warn};

/// Import every entry under the repository root.
///
/// Each directory `<name>` must hold `<name>/<name>.md`. Only sections whose
/// titles are in `public` are kept, along with the files of the directory
/// that those sections mention.
///
/// Directory names are unique, so entries are inserted directly rather than
/// through `Journal::add`; renaming on conflict is only needed when merging
/// journals from different machines.
///
/// # Errors
///
/// The first entry that cannot be read or parsed aborts the whole import.
pub fn import_journal<R: JournalRepository>(repo: &R, public: &PublicSections) -> Result<Journal> {
    let mut journal = Journal::new();

    for name in repo.list_entry_dirs()? {
        let entry = import_entry(repo, &name, public).inspect_err(|e| {
            warn!(entry = %name, error = %e, "entry import failed");
        })?;
        journal.entries.insert(name, entry);
    }

    debug!(entries = journal.len(), "journal imported");
    Ok(journal)
}

fn import_entry<R: JournalRepository>(
    repo: &R,
    name: &str,
    public: &PublicSections,
) -> Result<Entry> {
    let dir = repo.root().join(name);
    let path = repo.entry_path(name);

    let raw = repo.read_file(&path).map_err(|e| DevjError::io(&path, e))?;
    let text = String::from_utf8(raw)
        .map_err(|e| DevjError::io(&path, io::Error::new(io::ErrorKind::InvalidData, e)))?;

    let mut entry = Entry::parse_public(&text, Some(public))?;
    entry.name = name.to_string();
    entry.file_names = repo.list_files(&dir)?.into_iter().collect();
    entry.import_files(public, &dir, |file| repo.read_file(file))?;

    debug!(
        entry = %name,
        sections = entry.sections.len(),
        files = entry.public_files.len(),
        "imported entry"
    );
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Section, Style};
    use crate::infrastructure::{Config, FileSystemRepository};
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Journal held in memory, keyed by full path
    struct MemoryRepository {
        root: PathBuf,
        files: BTreeMap<PathBuf, Vec<u8>>,
    }

    impl MemoryRepository {
        fn new(files: &[(&str, &str)]) -> Self {
            let root = PathBuf::from("/journal");
            let files = files
                .iter()
                .map(|(path, data)| (root.join(path), data.as_bytes().to_vec()))
                .collect();
            MemoryRepository { root, files }
        }
    }

    impl JournalRepository for MemoryRepository {
        fn root(&self) -> &Path {
            &self.root
        }

        fn load_config(&self) -> Result<Config> {
            Ok(Config::default())
        }

        fn save_config(&self, _config: &Config) -> Result<()> {
            Ok(())
        }

        fn is_initialized(&self) -> bool {
            true
        }

        fn initialize(&self) -> Result<()> {
            Ok(())
        }

        fn list_entry_dirs(&self) -> Result<Vec<String>> {
            let mut dirs: Vec<String> = self
                .files
                .keys()
                .filter_map(|p| p.strip_prefix(&self.root).ok())
                .filter_map(|p| p.iter().next())
                .filter_map(|d| d.to_str().map(str::to_string))
                .collect();
            dirs.dedup();
            Ok(dirs)
        }

        fn list_files(&self, dir: &Path) -> Result<Vec<String>> {
            Ok(self
                .files
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
                .collect())
        }

        fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }
    }

    fn public() -> PublicSections {
        PublicSections::new(["do"])
    }

    #[test]
    fn test_import_keeps_public_sections_and_files() {
        let repo = MemoryRepository::new(&[
            (
                "2019-01-02/2019-01-02.md",
                "# Do\n\nwrote notes.txt\n\n# Private\n\nsecret.txt\n",
            ),
            ("2019-01-02/notes.txt", "public notes"),
            ("2019-01-02/secret.txt", "secret"),
            ("2019-01-03/2019-01-03.md", "Do\n==\n\nnothing attached\n"),
        ]);

        let journal = import_journal(&repo, &public()).unwrap();
        assert_eq!(journal.len(), 2);

        let first = journal.get("2019-01-02").unwrap();
        assert_eq!(first.name, "2019-01-02");
        assert_eq!(first.sections, vec![Section::new("Do", "wrote notes.txt")]);
        assert_eq!(
            first.public_files.keys().collect::<Vec<_>>(),
            vec!["notes.txt"]
        );
        assert_eq!(first.public_files["notes.txt"], b"public notes".to_vec());
        assert!(first.file_names.contains("secret.txt"));

        let second = journal.get("2019-01-03").unwrap();
        assert_eq!(second.style, Style::Underline);
        assert!(second.public_files.is_empty());
    }

    #[test]
    fn test_import_empty_root() {
        let repo = MemoryRepository::new(&[]);
        let journal = import_journal(&repo, &public()).unwrap();
        assert!(journal.is_empty());
    }

    #[test]
    fn test_import_fails_on_misnamed_entry_file() {
        let repo = MemoryRepository::new(&[
            ("2019-01-02/2019-01-02.md", "# Do\n\nfine\n"),
            ("2019-01-03/today.md", "# Do\n\nwrong name\n"),
        ]);

        match import_journal(&repo, &public()) {
            Err(DevjError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/journal/2019-01-03/2019-01-03.md"))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_import_fails_on_unparseable_entry() {
        let repo = MemoryRepository::new(&[("2019-01-02/2019-01-02.md", "no heading here")]);

        assert!(matches!(
            import_journal(&repo, &public()),
            Err(DevjError::MissingTitle)
        ));
    }

    #[test]
    fn test_import_from_filesystem() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let dir = temp.path().join("2019-01-02");
        fs::create_dir(&dir).unwrap();
        fs::write(
            dir.join("2019-01-02.md"),
            "# Do\n\nsee notes.txt\n\n# Learn\n\nrust\n",
        )
        .unwrap();
        fs::write(dir.join("notes.txt"), [0u8, 159, 146, 150]).unwrap();

        let journal = import_journal(&repo, &public()).unwrap();

        let entry = journal.get("2019-01-02").unwrap();
        assert_eq!(entry.sections.len(), 1);
        assert_eq!(entry.public_files["notes.txt"], vec![0u8, 159, 146, 150]);
    }
}
