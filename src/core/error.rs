//! Error types.
//!
//! Every domain error is an input-validation failure the player can fix
//! and resubmit. None of them leave a session half-mutated: operations
//! validate first and commit last.

use thiserror::Error;

use super::phase::SessionPhase;

/// Validation failures raised by the scoring sessions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Fewer non-empty names than the game needs.
    #[error("at least {min} players are required, got {got}")]
    NotEnoughPlayers { min: usize, got: usize },

    #[error("at most {max} players are supported, got {got}")]
    TooManyPlayers { max: usize, got: usize },

    /// Two names are equal after normalization.
    #[error("duplicate player name '{0}'")]
    DuplicateName(String),

    #[error("dealer seat {index} does not exist at a table of {player_count}")]
    InvalidDealer { index: usize, player_count: usize },

    #[error("Dutch caller seat {index} does not exist at a table of {player_count}")]
    InvalidCaller { index: usize, player_count: usize },

    /// Game limit must be positive.
    #[error("limit must be greater than zero")]
    InvalidLimit,

    /// A Papayoo round does not add up to the point pool.
    #[error("round total is {sum}, expected {expected}")]
    SumMismatch { sum: i64, expected: i32 },

    #[error("no Papayoo color selected")]
    MissingColor,

    /// Auto-complete needs exactly one blank field.
    #[error("auto-complete needs exactly one blank field, found {0}")]
    AutoCompleteBlanks(usize),

    /// The value that would balance the round does not fit a score.
    #[error("auto-complete would need {needed}, which is out of range")]
    AutoCompleteRange { needed: i64 },

    #[error("expected {expected} scores, got {got}")]
    ScoreCount { expected: usize, got: usize },

    #[error("round {0} does not exist")]
    UnknownRound(usize),

    /// Operation not allowed in the current lifecycle phase.
    #[error("cannot {action} while the session is {phase}")]
    WrongPhase {
        action: &'static str,
        phase: SessionPhase,
    },

    #[error("final scores unlock after {required} rounds, {played} played")]
    FinishTooEarly { required: usize, played: usize },
}

impl ScoreError {
    /// Creates a WrongPhase error
    pub fn wrong_phase(action: &'static str, phase: SessionPhase) -> Self {
        Self::WrongPhase { action, phase }
    }
}

/// Failures of the key-value store backing persisted state.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Keys become file names, so path separators are refused.
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

impl StorageError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    pub fn json(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            key: key.into(),
            source,
        }
    }
}
