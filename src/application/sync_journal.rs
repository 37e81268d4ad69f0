//! Export and sync use cases
//!
//! Both import the public part of the journal; export hands back the JSON
//! document, sync posts it to a server.

use crate::application::import_journal;
use crate::domain::{wire, Journal};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository, SyncClient, SyncTarget};
use tracing::{debug, info, warn};

/// Import the public journal using the repository's configured sections.
pub fn public_journal(repository: &FileSystemRepository) -> Result<Journal> {
    let public = repository.load_config()?.public_sections();
    if public.is_empty() {
        warn!("no public sections configured, entries will carry no sections");
    } else {
        debug!(sections = ?public.iter().collect::<Vec<_>>(), "importing public sections");
    }
    import_journal(repository, &public)
}

/// Serialize the public journal to its JSON document.
pub fn export_journal(repository: &FileSystemRepository) -> Result<String> {
    let journal = public_journal(repository)?;
    info!(entries = journal.len(), "journal exported");
    wire::to_json(&journal)
}

/// Result of a finished sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub entries: usize,
    pub status: u16,
}

/// Service for posting the public journal to a sync server
pub struct SyncService {
    repository: FileSystemRepository,
}

impl SyncService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SyncService { repository }
    }

    /// Validate the target, import the journal and post it.
    ///
    /// The target is checked first so bad credentials fail before any
    /// file is read.
    pub fn execute(&self, target: &SyncTarget) -> Result<SyncReport> {
        target.validate()?;
        let journal = public_journal(&self.repository)?;

        let status = SyncClient::new()?.send(target, &journal)?;
        Ok(SyncReport {
            entries: journal.len(),
            status,
        })
    }
}
