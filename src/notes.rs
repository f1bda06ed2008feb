//! Client Notes
//!
//! Free-text notes keyed by customer name. Reads never fail; a missing entry
//! reads as empty.

use std::collections::HashMap;

/// Per-customer note text
#[derive(Debug, Clone, Default)]
pub struct NotesStore {
    notes: HashMap<String, String>,
}

impl NotesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an empty note for every name not already present
    ///
    /// Existing notes, including those for names no longer on the roster,
    /// are left alone.
    pub fn initialize<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.notes.entry(name.to_string()).or_default();
        }
    }

    /// Note text for `name`, or an empty string
    pub fn get(&self, name: &str) -> &str {
        self.notes.get(name).map(String::as_str).unwrap_or("")
    }

    /// Overwrite the note for `name`
    pub fn set(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.notes.insert(name.into(), text.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.notes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["Alpha", "Beta", "Gamma"];

    #[test]
    fn test_initialize_creates_empty_entries() {
        let mut notes = NotesStore::new();
        notes.initialize(NAMES);

        assert_eq!(notes.len(), 3);
        for name in NAMES {
            assert!(notes.contains(name));
            assert_eq!(notes.get(name), "");
        }
    }

    #[test]
    fn test_initialize_keeps_existing() {
        let mut notes = NotesStore::new();
        notes.set("Alpha", "renewal in Q3");
        notes.initialize(NAMES);

        assert_eq!(notes.get("Alpha"), "renewal in Q3");
    }

    #[test]
    fn test_set_isolated() {
        let mut notes = NotesStore::new();
        notes.initialize(NAMES);
        notes.set("Beta", "hello");

        assert_eq!(notes.get("Beta"), "hello");
        assert_eq!(notes.get("Alpha"), "");
        assert_eq!(notes.get("Gamma"), "");
    }

    #[test]
    fn test_set_overwrites() {
        let mut notes = NotesStore::new();
        notes.set("Alpha", "first");
        notes.set("Alpha", "second");
        assert_eq!(notes.get("Alpha"), "second");
    }

    #[test]
    fn test_get_missing_is_empty() {
        let notes = NotesStore::new();
        assert_eq!(notes.get("Nobody"), "");
        assert!(!notes.contains("Nobody"));
    }

    #[test]
    fn test_set_creates_entry() {
        let mut notes = NotesStore::new();
        notes.set("Delta", "new");
        assert!(notes.contains("Delta"));
    }
}
