//! Application layer - Use cases and orchestration

pub mod edit_entry;
pub mod import_journal;
pub mod init;
pub mod manage_config;
pub mod new_entry;
pub mod sync_journal;
pub mod unpack;

pub use edit_entry::EditEntryService;
pub use import_journal::import_journal;
pub use manage_config::ConfigService;
pub use new_entry::NewEntryService;
pub use sync_journal::{export_journal, SyncReport, SyncService};
pub use unpack::{unpack, UnpackReport};
