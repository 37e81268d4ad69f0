//! Unpack use case: the receiving side of a sync
//!
//! Writes a serialized journal back out as an entry tree, one directory per
//! entry holding the exported entry file and its public files.

use crate::domain::Journal;
use crate::error::{DevjError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use std::path::{Component, Path};
use tracing::debug;

/// What an unpack wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnpackReport {
    pub entries: usize,
    pub files: usize,
}

/// Names arrive from another machine; only plain file names are accepted.
fn check_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if name.is_empty() || !plain || name.contains(['/', '\\']) {
        return Err(DevjError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Write every entry of `journal` under `dest`.
///
/// Each entry lands in `<dest>/<name>/<name>.md`, rendered in its own
/// style, with its public files next to it. Existing files are never
/// overwritten.
pub fn unpack(journal: &Journal, dest: &Path) -> Result<UnpackReport> {
    let target = FileSystemRepository::new(dest.to_path_buf());
    let mut report = UnpackReport::default();

    // Check every name up front so a bad journal writes nothing.
    for (name, entry) in journal.iter() {
        check_name(name)?;
        for file in entry.public_files.keys() {
            check_name(file)?;
        }
    }

    for (name, entry) in journal.iter() {
        let path = target.entry_path(name);
        target.safe_write(&path, entry.export().as_bytes())?;
        report.entries += 1;

        let dir = dest.join(name);
        for (file, contents) in &entry.public_files {
            target.safe_write(&dir.join(file), contents)?;
            report.files += 1;
        }
        debug!(entry = %name, files = entry.public_files.len(), "unpacked entry");
    }

    Ok(report)
}
