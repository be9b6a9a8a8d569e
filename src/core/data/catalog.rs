//! Translation entries and the per-file catalog.

use indexmap::IndexMap;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// A single extracted translation message.
///
/// `key` is never empty. Markers without an explicit id use their message as key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    pub message: String,
    pub description: Option<String>,
}

impl TranslationEntry {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

/// Body of an entry as it appears in a translation file.
#[derive(Serialize)]
struct EntryBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Ordered mapping from key to entry.
///
/// Iteration follows the first occurrence of each key. Inserting an existing
/// key replaces its entry in place (last write wins, first position kept).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCatalog {
    entries: IndexMap<String, TranslationEntry>,
}

impl TranslationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: TranslationEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Insert every entry of `other`, in its order.
    pub fn extend(&mut self, other: TranslationCatalog) {
        for (_, entry) in other.entries {
            self.insert(entry);
        }
    }

    pub fn get(&self, key: &str) -> Option<&TranslationEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranslationEntry> {
        self.entries.values()
    }
}

impl Serialize for TranslationCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, entry) in &self.entries {
            map.serialize_entry(
                key,
                &EntryBody {
                    message: &entry.message,
                    description: entry.description.as_deref(),
                },
            )?;
        }
        map.end()
    }
}
