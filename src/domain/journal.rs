//! Journal aggregate: every known entry keyed by name

use crate::domain::entry::Entry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Collection of entries keyed by entry name (usually the date it was written)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default, deserialize_with = "crate::domain::wire::null_as_default")]
    pub entries: BTreeMap<String, Entry>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    /// Add an entry under its name.
    ///
    /// Adding an entry equal to the one already stored under that name does
    /// nothing. A different entry is renamed by appending "1" until it lands
    /// on a free name or on an equal entry.
    pub fn add(&mut self, mut entry: Entry) {
        // TODO: replace the "1" suffix with a date or content based version name.
        loop {
            match self.entries.get(&entry.name) {
                None => {
                    self.entries.insert(entry.name.clone(), entry);
                    return;
                }
                Some(existing) if existing.equals(&entry) => return,
                Some(_) => entry.name.push('1'),
            }
        }
    }

    /// Whether any stored entry equals `entry`, whatever its name.
    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries.values().any(|e| e.equals(entry))
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}
