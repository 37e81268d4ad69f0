//! devj - Developer journal
//!
//! Keeps one markdown entry per day in `<date>/<date>.md`, parses entries
//! into titled sections, and syncs the public sections (plus the files they
//! mention) to a server.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DevjError;
