//! Persistence: key-value stores, the shared name history, preferences and
//! the versioned session schema.
//!
//! Every blob is one JSON document under a fixed key, read and written
//! whole. There are no partial updates and no concurrent writers.

pub mod store;
pub mod schema;
pub mod history;
pub mod preferences;

pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use schema::{
    clear_session, decode, encode, load_session, save_session, Decoded, LegacyRound, Versioned,
    SCHEMA_VERSION,
};
pub use history::{PlayerNameHistory, HISTORY_KEY, LEGACY_HISTORY_KEY};
pub use preferences::{Preferences, PREFERENCES_KEY};
