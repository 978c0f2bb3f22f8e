//! Versioned session schema.
//!
//! Current blobs are `{"version": 1, "state": {...}}`. Blobs without a
//! `version` field were written by the legacy score pages and hold a
//! game-specific legacy shape; they are migrated once on load and written
//! back in the current schema.

use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::store::KeyValueStore;
use crate::core::input::coerce_json_score;
use crate::core::{ScoreRow, StorageError};

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// A persisted session with one current schema and one legacy shape.
pub trait Versioned: Serialize + DeserializeOwned + Default {
    /// Storage key of the blob.
    const KEY: &'static str;

    /// Unversioned shape written by earlier releases.
    type Legacy: DeserializeOwned;

    /// One-time upgrade of a legacy blob.
    fn migrate(legacy: Self::Legacy) -> Self;
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Outcome of decoding a stored blob.
#[derive(Debug, PartialEq)]
pub enum Decoded<T> {
    Current(T),
    /// Came from a legacy blob and should be written back.
    Migrated(T),
}

impl<T> Decoded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Decoded::Current(state) | Decoded::Migrated(state) => state,
        }
    }
}

/// Serialize a session in the current schema.
pub fn encode<T: Versioned>(state: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(&Envelope {
        version: SCHEMA_VERSION,
        state,
    })
}

/// Decode a stored blob, migrating legacy shapes.
pub fn decode<T: Versioned>(raw: &str) -> Result<Decoded<T>, serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;

    match value.get("version").and_then(Value::as_u64) {
        Some(version) if version == u64::from(SCHEMA_VERSION) => {
            let envelope: Envelope<T> = serde_json::from_value(value)?;
            Ok(Decoded::Current(envelope.state))
        }
        Some(version) => Err(<serde_json::Error as serde::de::Error>::custom(format!(
            "unsupported schema version {version}"
        ))),
        None => {
            let legacy: T::Legacy = serde_json::from_value(value)?;
            Ok(Decoded::Migrated(T::migrate(legacy)))
        }
    }
}

/// Load a session. Missing or corrupt blobs yield a fresh session.
pub fn load_session<T: Versioned>(store: &mut dyn KeyValueStore) -> Result<T, StorageError> {
    let Some(raw) = store.get(T::KEY)? else {
        return Ok(T::default());
    };

    match decode::<T>(&raw) {
        Ok(Decoded::Current(state)) => Ok(state),
        Ok(Decoded::Migrated(state)) => {
            info!("migrated legacy '{}' to schema v{}", T::KEY, SCHEMA_VERSION);
            save_session(store, &state)?;
            Ok(state)
        }
        Err(err) => {
            warn!("discarding unreadable '{}': {}", T::KEY, err);
            Ok(T::default())
        }
    }
}

/// Write a session wholesale.
pub fn save_session<T: Versioned>(
    store: &mut dyn KeyValueStore,
    state: &T,
) -> Result<(), StorageError> {
    let blob = encode(state).map_err(|e| StorageError::json(T::KEY, e))?;
    store.set(T::KEY, &blob)
}

/// Remove a session's blob.
pub fn clear_session<T: Versioned>(store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(T::KEY)
}

/// A legacy round: either a bare score array or an object with `scores`
/// and an optional suit marker.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum LegacyRound {
    Scores(Vec<Value>),
    Record {
        scores: Vec<Value>,
        #[serde(default)]
        color: Option<String>,
    },
}

impl LegacyRound {
    /// Scores coerced to integers.
    #[must_use]
    pub fn scores(&self) -> ScoreRow {
        let values = match self {
            LegacyRound::Scores(values) | LegacyRound::Record { scores: values, .. } => values,
        };
        values.iter().map(coerce_json_score).collect()
    }

    /// Suit marker, if the record carried one.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        match self {
            LegacyRound::Record { color, .. } => color.as_deref(),
            LegacyRound::Scores(_) => None,
        }
    }
}
