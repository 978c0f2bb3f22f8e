//! Persisted user preferences.

use log::warn;
use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::core::StorageError;
use crate::i18n::Language;

pub const PREFERENCES_KEY: &str = "preferences";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
}

impl Preferences {
    /// Load preferences; anything unreadable falls back to defaults.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, StorageError> {
        let Some(raw) = store.get(PREFERENCES_KEY)? else {
            return Ok(Self::default());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("discarding unreadable '{PREFERENCES_KEY}': {err}");
            Self::default()
        }))
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        let blob =
            serde_json::to_string(self).map_err(|e| StorageError::json(PREFERENCES_KEY, e))?;
        store.set(PREFERENCES_KEY, &blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::store::MemoryStore;

    #[test]
    fn test_defaults_to_french() {
        let store = MemoryStore::new();
        assert_eq!(Preferences::load(&store).unwrap().language, Language::Fr);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            language: Language::En,
        };
        prefs.save(&mut store).unwrap();
        assert_eq!(
            store.get(PREFERENCES_KEY).unwrap().unwrap(),
            r#"{"language":"en"}"#
        );
        assert_eq!(Preferences::load(&store).unwrap(), prefs);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let mut store = MemoryStore::new();
        store.set(PREFERENCES_KEY, r#"{"language":"de"}"#).unwrap();
        assert_eq!(Preferences::load(&store).unwrap(), Preferences::default());
    }
}
