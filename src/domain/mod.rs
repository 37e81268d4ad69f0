//! Domain layer - Entries, sections and the journal they form

pub mod entry;
pub mod journal;
pub mod public;
pub mod wire;

pub use entry::{Entry, Section, Style};
pub use journal::Journal;
pub use public::PublicSections;
