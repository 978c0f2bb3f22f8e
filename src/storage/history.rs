//! Shared player-name history.
//!
//! Every game appends the names it registers; setup screens read the list
//! back for autocomplete. Entries keep insertion order and are never
//! removed.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::core::StorageError;

/// Storage key shared by all games.
pub const HISTORY_KEY: &str = "player_names";

/// Key of the list kept by the legacy score pages, shared with their Skull
/// King sheet. It is read but never written.
pub const LEGACY_HISTORY_KEY: &str = "skullKing_Names";

fn read_names(store: &dyn KeyValueStore, key: &str) -> Result<Vec<String>, StorageError> {
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };
    Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
        warn!("discarding unreadable '{key}': {err}");
        Vec::new()
    }))
}

/// Ordered, deduplicated list of previously used names.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerNameHistory {
    names: Vec<String>,
}

impl PlayerNameHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the shared list. Names from the legacy list follow the current
    /// ones; the next `save` folds them in under `HISTORY_KEY`. A missing
    /// or unreadable blob contributes nothing.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let mut history = Self::default();
        for key in [HISTORY_KEY, LEGACY_HISTORY_KEY] {
            for name in read_names(store, key)? {
                history.insert(&name);
            }
        }
        Ok(history)
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let blob = serde_json::to_string(self).map_err(|e| StorageError::json(HISTORY_KEY, e))?;
        store.set(HISTORY_KEY, &blob)
    }

    /// Append a name unless it is blank or already known.
    /// Returns whether the list changed.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        debug!("remembering player name {name:?}");
        self.names.push(name.to_string());
        true
    }

    /// Append several names; returns how many were new.
    pub fn extend<S: AsRef<str>>(&mut self, names: &[S]) -> usize {
        names.iter().filter(|n| self.insert(n.as_ref())).count()
    }

    /// Load, append and save in one step. Only writes when something changed.
    pub fn remember<S: AsRef<str>>(
        store: &mut dyn KeyValueStore,
        names: &[S],
    ) -> Result<usize, StorageError> {
        let mut history = Self::load(store)?;
        let added = history.extend(names);
        if added > 0 {
            history.save(store)?;
        }
        Ok(added)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Autocomplete candidates: names starting with `prefix`,
    /// case-insensitively, in insertion order.
    #[must_use]
    pub fn suggestions(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        self.names
            .iter()
            .filter(|n| n.to_lowercase().starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::store::MemoryStore;

    #[test]
    fn test_insert_dedupes_and_keeps_order() {
        let mut history = PlayerNameHistory::new();
        assert!(history.insert("Bob"));
        assert!(history.insert(" Ann "));
        assert!(!history.insert("Bob"));
        assert!(!history.insert("   "));

        let names: Vec<_> = history.iter().collect();
        assert_eq!(names, vec!["Bob", "Ann"]);
    }

    #[test]
    fn test_suggestions_are_case_insensitive() {
        let mut history = PlayerNameHistory::new();
        history.extend(&["Alice", "bob", "Alex", "Bea"]);

        assert_eq!(history.suggestions("al"), vec!["Alice", "Alex"]);
        assert_eq!(history.suggestions("B"), vec!["bob", "Bea"]);
        assert_eq!(history.suggestions("").len(), 4);
    }

    #[test]
    fn test_remember_persists() {
        let mut store = MemoryStore::new();
        assert_eq!(PlayerNameHistory::remember(&mut store, &["Ann", "Bob"]).unwrap(), 2);
        assert_eq!(PlayerNameHistory::remember(&mut store, &["Bob", "Cy"]).unwrap(), 1);

        assert_eq!(
            store.get(HISTORY_KEY).unwrap().unwrap(),
            r#"["Ann","Bob","Cy"]"#
        );
    }

    #[test]
    fn test_corrupt_history_is_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "{\"oops\":").unwrap();
        assert!(PlayerNameHistory::load(&store).unwrap().is_empty());
    }

    #[test]
    fn test_load_dedupes_stored_duplicates() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, r#"["Ann","Ann"," Bob"]"#).unwrap();
        let history = PlayerNameHistory::load(&store).unwrap();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_legacy_names_are_merged_and_saved_forward() {
        let mut store = MemoryStore::new();
        store
            .set(LEGACY_HISTORY_KEY, r#"["Zoe","Ann"]"#)
            .unwrap();
        store.set(HISTORY_KEY, r#"["Ann"]"#).unwrap();

        let history = PlayerNameHistory::load(&store).unwrap();
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["Ann", "Zoe"]);

        assert_eq!(PlayerNameHistory::remember(&mut store, &["Bob"]).unwrap(), 1);
        assert_eq!(
            store.get(HISTORY_KEY).unwrap().unwrap(),
            r#"["Ann","Zoe","Bob"]"#
        );
        assert_eq!(
            store.get(LEGACY_HISTORY_KEY).unwrap().unwrap(),
            r#"["Zoe","Ann"]"#
        );
    }

    #[test]
    fn test_corrupt_legacy_names_are_ignored() {
        let mut store = MemoryStore::new();
        store.set(LEGACY_HISTORY_KEY, "not json").unwrap();
        store.set(HISTORY_KEY, r#"["Ann"]"#).unwrap();
        let history = PlayerNameHistory::load(&store).unwrap();
        assert_eq!(history.len(), 1);
    }
}
