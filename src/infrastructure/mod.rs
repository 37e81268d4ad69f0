//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod repository;
pub mod sync;

pub use config::Config;
pub use editor::EditorSession;
pub use repository::{FileSystemRepository, JournalRepository};
pub use sync::{SyncClient, SyncTarget};
