//! # scoresheet
//!
//! Score sheets for the Dutch and Papayoo card games.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: the per-round scoring rules are plain functions over
//!    score rows. Sessions validate input, apply a rule and commit.
//!
//! 2. **Whole-state persistence**: each session is one serializable struct,
//!    written wholesale to a key-value store after every change and read
//!    back wholesale on load.
//!
//! 3. **Rendering is a projection**: text views are computed from a
//!    session and a language catalog, never stored.
//!
//! ## Modules
//!
//! - `core`: seats, configuration, lifecycle, registration, errors
//! - `rules`: `ScoreSheet` trait, game results, ranking
//! - `games`: Dutch and Papayoo rules and sessions
//! - `storage`: key-value stores, name history, preferences, schema
//! - `i18n`: French and English string catalogs
//! - `render`: board table, ranking card, round total, export

pub mod core;
pub mod rules;
pub mod games;
pub mod storage;
pub mod i18n;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    DutchConfig, LimitMode, PlayerId, PlayerMap, ScoreError, ScoreRow, SessionPhase,
    StorageError, TableConfig,
};

pub use crate::rules::{GameResult, Ranking, ScoreSheet, Standing};

pub use crate::games::dutch::{resolve_round, DutchOutcome, DutchRound, DutchSession};
pub use crate::games::papayoo::{auto_complete, PapayooRound, PapayooSession, Suit};

pub use crate::storage::{
    FileStore, KeyValueStore, MemoryStore, PlayerNameHistory, Preferences, Versioned,
};

pub use crate::i18n::{Catalog, Language};
