//! Public sections and discovery of the files they reference

use crate::domain::entry::Entry;
use crate::error::{DevjError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Case-insensitive set of section titles that may leave the machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicSections {
    titles: BTreeSet<String>,
}

impl PublicSections {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        PublicSections {
            titles: titles
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.contains(&title.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Lowercased titles, sorted
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(String::as_str)
    }
}

impl Entry {
    /// Names of the entry's files that public sections mention.
    ///
    /// Matching is a plain substring test on the body, so `a.txt` also
    /// matches inside `data.txt`. A file mentioned by several public
    /// sections is listed once per section.
    pub fn public_file_list(&self, public: &PublicSections) -> Vec<String> {
        let mut names = Vec::new();

        for section in &self.sections {
            if !public.contains(&section.title) {
                continue;
            }
            for name in &self.file_names {
                if section.body.contains(name.as_str()) {
                    names.push(name.clone());
                }
            }
        }

        names
    }

    /// Read every public file from `base_dir` and store the contents in
    /// `public_files`, replacing what was there.
    ///
    /// Nothing is stored if any read fails.
    pub fn import_files<F>(
        &mut self,
        public: &PublicSections,
        base_dir: &Path,
        mut read_file: F,
    ) -> Result<()>
    where
        F: FnMut(&Path) -> std::io::Result<Vec<u8>>,
    {
        let mut files = BTreeMap::new();

        for name in self.public_file_list(public) {
            if files.contains_key(&name) {
                continue;
            }
            let path = base_dir.join(&name);
            let data = read_file(&path).map_err(|e| DevjError::io(&path, e))?;
            files.insert(name, data);
        }

        self.public_files = files;
        Ok(())
    }
}
