//! JSON wire format for journals sent between machines

use crate::domain::journal::Journal;
use crate::error::Result;

/// Serialize a journal to the JSON document a sync posts.
pub fn to_json(journal: &Journal) -> Result<String> {
    Ok(serde_json::to_string_pretty(journal)?)
}

/// Read a journal back from its JSON document.
pub fn from_json(text: &str) -> Result<Journal> {
    Ok(serde_json::from_str(text)?)
}

/// Read an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Attached file contents travel as standard base64 strings.
pub(crate) mod base64_files {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S>(
        files: &BTreeMap<String, Vec<u8>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(files.iter().map(|(name, data)| (name, STANDARD.encode(data))))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<BTreeMap<String, String>>::deserialize(deserializer)?;
        encoded
            .unwrap_or_default()
            .into_iter()
            .map(|(name, data)| {
                STANDARD
                    .decode(data.as_bytes())
                    .map(|bytes| (name.clone(), bytes))
                    .map_err(|e| D::Error::custom(format!("file '{}': {}", name, e)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{Entry, Section, Style};
    use serde_json::json;

    #[test]
    fn test_journal_json_shape() {
        let mut journal = Journal::new();
        let mut entry = Entry {
            name: "2019-03-19".to_string(),
            style: Style::Underline,
            sections: vec![Section::new("Do", "see notes.txt")],
            ..Entry::default()
        };
        entry
            .public_files
            .insert("notes.txt".to_string(), b"hello".to_vec());
        entry.file_names.insert("notes.txt".to_string());
        journal.add(entry);

        let value: serde_json::Value = serde_json::from_str(&to_json(&journal).unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "entries": {
                    "2019-03-19": {
                        "name": "2019-03-19",
                        "sections": [{"title": "Do", "body": "see notes.txt"}],
                        "style": "underline",
                        "files": {"notes.txt": "aGVsbG8="}
                    }
                }
            })
        );
    }

    #[test]
    fn test_decode_files_and_style() {
        let journal = from_json(
            r#"{"entries": {"2019-03-19": {
                "name": "2019-03-19",
                "sections": [{"title": "Do", "body": "x"}],
                "style": "UNDERLINE",
                "files": {"notes.txt": "aGVsbG8="}
            }}}"#,
        )
        .unwrap();

        let entry = journal.get("2019-03-19").unwrap();
        assert_eq!(entry.style, Style::Underline);
        assert_eq!(entry.public_files["notes.txt"], b"hello".to_vec());
        assert!(entry.file_names.is_empty());
    }

    #[test]
    fn test_unknown_or_missing_style_is_pound() {
        let journal = from_json(
            r#"{"entries": {
                "a": {"name": "a", "sections": [], "style": "fancy"},
                "b": {"name": "b", "sections": [], "files": null},
                "c": {"name": "c", "sections": null, "style": null, "files": null}
            }}"#,
        )
        .unwrap();

        assert_eq!(journal.get("a").unwrap().style, Style::Pound);
        assert_eq!(journal.get("b").unwrap().style, Style::Pound);
        assert!(journal.get("b").unwrap().public_files.is_empty());

        let nulls = journal.get("c").unwrap();
        assert_eq!(nulls.style, Style::Pound);
        assert!(nulls.sections.is_empty());
        assert!(nulls.public_files.is_empty());
    }

    #[test]
    fn test_null_entries_read_as_empty_journal() {
        assert!(from_json(r#"{"entries": null}"#).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_base64_is_rejected() {
        let result = from_json(r#"{"entries": {"a": {"name": "a", "files": {"x": "!!!"}}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_journal_has_empty_entries() {
        let value: serde_json::Value =
            serde_json::from_str(&to_json(&Journal::new()).unwrap()).unwrap();
        assert_eq!(value, json!({"entries": {}}));
        assert!(from_json("{}").unwrap().is_empty());
    }
}
