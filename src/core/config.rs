//! Table and game configuration.
//!
//! A session is started from:
//! - `TableConfig`: entered player names and the first dealer
//! - `DutchConfig`: end condition for Dutch (score or round limit)
//!
//! Papayoo has no options beyond the table; its point pool is fixed.

use serde::{Deserialize, Serialize};

/// Minimum seats for a Dutch table.
pub const DUTCH_MIN_PLAYERS: usize = 2;

/// Minimum seats for a Papayoo table.
pub const PAPAYOO_MIN_PLAYERS: usize = 3;

/// Points dealt in every Papayoo round: payoos 1-20 (210) plus the Papayoo (40).
pub const PAPAYOO_POINTS: i32 = 250;

/// Final score of a Dutch caller who was strictly lowest.
pub const DUTCH_BONUS_SCORE: i32 = -10;

/// Added to a Dutch caller's raw score when someone scored lower.
pub const DUTCH_PENALTY: i32 = 10;

pub const DEFAULT_SCORE_LIMIT: u32 = 100;
pub const DEFAULT_ROUND_LIMIT: u32 = 10;

/// How a Dutch game ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitMode {
    /// Ends once any total reaches the limit.
    #[default]
    Score,
    /// Ends once the number of rounds reaches the limit.
    Rounds,
}

impl LimitMode {
    /// Limit pre-filled when the mode is selected.
    #[must_use]
    pub const fn default_limit(self) -> u32 {
        match self {
            LimitMode::Score => DEFAULT_SCORE_LIMIT,
            LimitMode::Rounds => DEFAULT_ROUND_LIMIT,
        }
    }
}

/// Dutch end-condition configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutchConfig {
    pub mode: LimitMode,
    pub limit: u32,
}

impl Default for DutchConfig {
    fn default() -> Self {
        Self::new(LimitMode::Score)
    }
}

impl DutchConfig {
    /// Create a configuration with the mode's default limit.
    #[must_use]
    pub fn new(mode: LimitMode) -> Self {
        Self {
            mode,
            limit: mode.default_limit(),
        }
    }

    /// Override the limit.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Names as entered on the setup screen, plus the first dealer.
///
/// Names are raw input: blank entries are allowed here and dropped when
/// the session validates the table. The dealer index refers to the
/// validated (non-blank) seats.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub names: Vec<String>,
    pub dealer: usize,
}

impl TableConfig {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            dealer: 0,
        }
    }

    /// Set the first dealer.
    #[must_use]
    pub fn with_dealer(mut self, dealer: usize) -> Self {
        self.dealer = dealer;
        self
    }
}
