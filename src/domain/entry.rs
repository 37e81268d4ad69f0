//! Journal entries: parsing raw text into sections and exporting them back

use crate::domain::public::PublicSections;
use crate::error::{DevjError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Heading convention used to delimit the sections of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// `# Title`
    #[default]
    Pound,
    /// `Title` followed by a line of `=`
    Underline,
}

// Unknown or null style strings fall back to Pound instead of failing the whole journal.
impl<'de> Deserialize<'de> for Style {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Style::from_name).unwrap_or_default())
    }
}

impl Style {
    /// Look up a style by name, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "pound" => Some(Style::Pound),
            "underline" => Some(Style::Underline),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Pound => "pound",
            Style::Underline => "underline",
        }
    }
}

/// A titled block of body text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl Section {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            body: body.into(),
        }
    }

    fn titled(title: &str) -> Self {
        Section::new(title, String::new())
    }

    fn push_line(&mut self, line: &str) {
        self.body.push('\n');
        self.body.push_str(line);
    }
}

/// One journal document, usually a single day's notes.
///
/// An empty `name` means the entry has not been named yet; the journal
/// importer names entries after their directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "crate::domain::wire::null_as_default")]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub style: Style,

    /// Contents of the attached files referenced from public sections
    #[serde(rename = "files", default, with = "crate::domain::wire::base64_files")]
    pub public_files: BTreeMap<String, Vec<u8>>,

    /// Names of the files found next to the entry on disk
    #[serde(skip)]
    pub file_names: BTreeSet<String>,
}

/// Closes sections as the parser finishes them, keeping only public ones
/// when a filter is set.
struct SectionCollector<'a> {
    public: Option<&'a PublicSections>,
    sections: Vec<Section>,
}

impl<'a> SectionCollector<'a> {
    fn new(public: Option<&'a PublicSections>) -> Self {
        SectionCollector {
            public,
            sections: Vec::new(),
        }
    }

    fn close(&mut self, mut section: Section) {
        section.body = section.body.trim().to_string();
        if self.public.is_none_or(|p| p.contains(&section.title)) {
            self.sections.push(section);
        }
    }

    fn finish(self, style: Style) -> Entry {
        Entry {
            sections: self.sections,
            style,
            ..Entry::default()
        }
    }
}

impl Entry {
    /// Starting point for a fresh journal: empty "Do" and "Learn" sections.
    pub fn template(style: Style) -> Self {
        Entry {
            style,
            sections: vec![Section::titled("Do"), Section::titled("Learn")],
            ..Entry::default()
        }
    }

    /// Parse raw entry text, keeping every section.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_public(text, None)
    }

    /// Parse raw entry text, keeping only the sections whose titles are in
    /// `public` (case-insensitive). `None` keeps everything.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the text is too short to hold a title
    /// - `MissingTitle` if the text opens with neither heading style
    pub fn parse_public(text: &str, public: Option<&PublicSections>) -> Result<Self> {
        if text.len() < 3 {
            return Err(DevjError::EmptyInput);
        }

        if text.starts_with("# ") {
            return Ok(parse_pound(text, public));
        }

        let head: Vec<&str> = text.splitn(3, '\n').collect();
        if head.len() > 1 && is_title(head[0], head[1]) {
            return Ok(parse_underline(text, public));
        }

        Err(DevjError::MissingTitle)
    }

    /// Render the entry back to text in its own heading style.
    pub fn export(&self) -> String {
        let mut out = String::new();

        for (i, section) in self.sections.iter().enumerate() {
            if i != 0 {
                out.push('\n');
            }
            match self.style {
                Style::Pound => {
                    out.push_str(&format!("# {}\n\n{}\n", section.title, section.body));
                }
                Style::Underline => {
                    let underline = "=".repeat(section.title.chars().count());
                    out.push_str(&format!(
                        "{}\n{}\n\n{}\n",
                        section.title, underline, section.body
                    ));
                }
            }
        }

        out
    }

    /// Compare two entries without regard to their names.
    pub fn equals(&self, other: &Entry) -> bool {
        self.sections == other.sections
            && self.style == other.style
            && self.public_files == other.public_files
            && self.file_names == other.file_names
    }
}

fn parse_pound(text: &str, public: Option<&PublicSections>) -> Entry {
    let mut collector = SectionCollector::new(public);
    let mut lines = text.split('\n');

    let first = lines.next().unwrap_or_default();
    let mut current = Section::titled(first.strip_prefix("# ").unwrap_or(first));

    for line in lines {
        if is_pound_heading(line) {
            collector.close(current);
            current = Section::titled(&line[2..]);
        } else {
            current.push_line(line);
        }
    }
    collector.close(current);

    collector.finish(Style::Pound)
}

fn parse_underline(text: &str, public: Option<&PublicSections>) -> Entry {
    let mut collector = SectionCollector::new(public);
    let lines: Vec<&str> = text.split('\n').collect();
    let mut current = Section::titled(lines[0].trim());

    if lines.len() < 4 {
        current.body = lines[2..].join("\n");
        collector.close(current);
        return collector.finish(Style::Underline);
    }

    // Two line window over the rest; `skip` drops the underline of a title
    // that was just consumed.
    let mut curr = lines[2];
    let mut skip = false;
    for &line in &lines[3..] {
        let past = curr;
        curr = line;

        if skip {
            skip = false;
            continue;
        }

        if is_title(past, curr) {
            collector.close(current);
            current = Section::titled(past.trim());
            skip = true;
        } else {
            current.push_line(past);
        }
    }

    if !skip {
        current.push_line(curr);
    }
    collector.close(current);

    collector.finish(Style::Underline)
}

fn is_pound_heading(line: &str) -> bool {
    line.chars().filter(|c| *c != ' ').count() >= 2 && line.starts_with("# ")
}

/// A title line has at least one non-space character; its underline is one
/// or more `=` and nothing else.
fn is_title(line: &str, underline: &str) -> bool {
    line.chars().any(|c| c != ' ')
        && !underline.is_empty()
        && underline.chars().all(|c| c == '=')
}
