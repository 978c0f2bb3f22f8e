//! Core types shared by both games: seats, configuration, lifecycle,
//! player registration and errors.

pub mod player;
pub mod config;
pub mod phase;
pub mod roster;
pub mod input;
pub mod error;

pub use player::{PlayerId, PlayerMap, ScoreRow, MAX_PLAYERS};
pub use config::{
    DutchConfig, LimitMode, TableConfig, DUTCH_BONUS_SCORE, DUTCH_MIN_PLAYERS, DUTCH_PENALTY,
    PAPAYOO_MIN_PLAYERS, PAPAYOO_POINTS,
};
pub use phase::SessionPhase;
pub use error::{ScoreError, StorageError};
