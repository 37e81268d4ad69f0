//! Output formatting utilities

use crate::application::manage_config::{value_of, CONFIG_KEYS};
use crate::domain::Journal;
use crate::infrastructure::Config;

/// One line per entry: name, public section titles and attached files
pub fn format_journal_summary(journal: &Journal) -> String {
    if journal.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (name, entry) in journal.iter() {
        let titles: Vec<&str> = entry.sections.iter().map(|s| s.title.as_str()).collect();
        output.push_str(&format!("{}  [{}]", name, titles.join(", ")));
        if !entry.public_files.is_empty() {
            let files: Vec<&str> = entry.public_files.keys().map(String::as_str).collect();
            output.push_str(&format!("  files: {}", files.join(", ")));
        }
        output.push('\n');
    }
    output
}

/// `key = value` lines for every config key
pub fn format_config(config: &Config) -> String {
    let mut output = String::new();
    for key in CONFIG_KEYS {
        let value = value_of(config, key).unwrap_or_default();
        output.push_str(&format!("{} = {}\n", key, value));
    }
    output
}
