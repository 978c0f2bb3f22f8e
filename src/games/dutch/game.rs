//! Dutch session: setup, round entry and the end condition.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::rule::{resolve_round, DutchOutcome};
use crate::core::roster::validate_roster;
use crate::core::{
    DutchConfig, LimitMode, PlayerId, PlayerMap, ScoreError, ScoreRow, SessionPhase, TableConfig,
    DUTCH_MIN_PLAYERS,
};
use crate::rules::ScoreSheet;
use crate::storage::{LegacyRound, Versioned};

/// Storage key of the Dutch session.
pub const DUTCH_KEY: &str = "dutch_state";

/// One committed Dutch round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutchRound {
    /// Card points as entered.
    pub raw: ScoreRow,
    /// Points after the Dutch adjustment.
    pub scores: ScoreRow,
    /// Seat that called Dutch, if anyone did.
    #[serde(default)]
    pub caller: Option<PlayerId>,
    /// Whether the call earned the bonus.
    #[serde(default)]
    pub success: bool,
}

impl DutchRound {
    /// How the call resolved, if there was one.
    #[must_use]
    pub fn outcome(&self) -> Option<DutchOutcome> {
        let seat = self.caller?.index();
        if self.success {
            return Some(DutchOutcome::Bonus);
        }
        let raw = self.raw.get(seat)?;
        let final_score = self.scores.get(seat)?;
        Some(if raw == final_score {
            DutchOutcome::Void
        } else {
            DutchOutcome::Penalty
        })
    }
}

/// Complete Dutch session state, persisted wholesale after every change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutchSession {
    phase: SessionPhase,
    players: Vec<String>,
    rounds: Vector<DutchRound>,
    mode: LimitMode,
    limit: u32,
    dealer: PlayerId,
}

impl Default for DutchSession {
    fn default() -> Self {
        let config = DutchConfig::default();
        Self {
            phase: SessionPhase::Setup,
            players: Vec::new(),
            rounds: Vector::new(),
            mode: config.mode,
            limit: config.limit,
            dealer: PlayerId::default(),
        }
    }
}

impl DutchSession {
    /// Create an empty session in setup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the table and leave setup.
    ///
    /// Requires at least two unique non-blank names, a positive limit and
    /// a dealer seat that exists.
    pub fn start(&mut self, table: &TableConfig, config: DutchConfig) -> Result<(), ScoreError> {
        if self.phase != SessionPhase::Setup {
            return Err(ScoreError::wrong_phase("start a game", self.phase));
        }
        let players = validate_roster(&table.names, DUTCH_MIN_PLAYERS)?;
        if config.limit == 0 {
            return Err(ScoreError::InvalidLimit);
        }
        let dealer = PlayerId::from_index(table.dealer, players.len()).ok_or(
            ScoreError::InvalidDealer {
                index: table.dealer,
                player_count: players.len(),
            },
        )?;

        info!(
            "dutch game started: {} players, {:?} limit {}",
            players.len(),
            config.mode,
            config.limit
        );
        self.players = players;
        self.rounds = Vector::new();
        self.mode = config.mode;
        self.limit = config.limit;
        self.dealer = dealer;
        self.phase = SessionPhase::InProgress;
        Ok(())
    }

    /// Commit one round of raw scores.
    ///
    /// Missing trailing scores count as 0. `caller` is the seat index of
    /// the player who called Dutch. The dealer moves one seat left, and
    /// the game finishes once the end condition holds.
    pub fn record_round(
        &mut self,
        raw: &[i32],
        caller: Option<usize>,
    ) -> Result<DutchRound, ScoreError> {
        if !self.phase.accepts_rounds() {
            return Err(ScoreError::wrong_phase("record a round", self.phase));
        }
        let player_count = self.players.len();
        if raw.len() > player_count {
            return Err(ScoreError::ScoreCount {
                expected: player_count,
                got: raw.len(),
            });
        }
        let caller = caller
            .map(|index| {
                PlayerId::from_index(index, player_count).ok_or(ScoreError::InvalidCaller {
                    index,
                    player_count,
                })
            })
            .transpose()?;

        let mut padded: ScoreRow = raw.iter().copied().collect();
        padded.resize(player_count, 0);

        let resolution = resolve_round(&padded, caller);
        let round = DutchRound {
            raw: padded,
            scores: resolution.scores,
            caller,
            success: resolution.outcome == Some(DutchOutcome::Bonus),
        };

        self.rounds.push_back(round.clone());
        self.dealer = self.dealer.next(player_count);
        info!(
            "dutch round {} recorded: {:?}",
            self.rounds.len(),
            round.scores.as_slice()
        );

        if self.is_over() {
            debug!("dutch end condition reached after {} rounds", self.rounds.len());
            self.phase = SessionPhase::Finished;
        }
        Ok(round)
    }

    /// Whether the end condition holds for the current sheet.
    #[must_use]
    pub fn is_over(&self) -> bool {
        if self.players.is_empty() {
            return false;
        }
        let limit = i64::from(self.limit);
        match self.mode {
            LimitMode::Score => self
                .totals()
                .as_slice()
                .iter()
                .any(|total| i64::from(*total) >= limit),
            LimitMode::Rounds => self.rounds.len() as i64 >= limit,
        }
    }

    /// Drop everything and return to setup.
    pub fn reset(&mut self) {
        info!("dutch session reset");
        *self = Self::default();
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<DutchRound> {
        &self.rounds
    }

    #[must_use]
    pub fn config(&self) -> DutchConfig {
        DutchConfig::new(self.mode).with_limit(self.limit)
    }
}

impl ScoreSheet for DutchSession {
    fn players(&self) -> &[String] {
        &self.players
    }

    fn phase(&self) -> SessionPhase {
        self.phase
    }

    fn dealer(&self) -> PlayerId {
        self.dealer
    }

    fn round_count(&self) -> usize {
        self.rounds.len()
    }

    fn round_scores(&self, round: usize) -> Option<&[i32]> {
        self.rounds.get(round).map(|r| r.scores.as_slice())
    }

    fn totals(&self) -> PlayerMap<i32> {
        let mut totals = PlayerMap::with_value(self.players.len(), 0);
        for round in &self.rounds {
            totals.accumulate(&round.scores);
        }
        totals
    }
}

/// Blob written by the legacy score page.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDutchState {
    #[serde(default)]
    players: Vec<String>,
    #[serde(default)]
    rounds: Vec<LegacyRound>,
    #[serde(default)]
    mode: LimitMode,
    #[serde(default)]
    limit: Option<serde_json::Value>,
    #[serde(default)]
    dealer_idx: usize,
}

impl Versioned for DutchSession {
    const KEY: &'static str = DUTCH_KEY;
    type Legacy = LegacyDutchState;

    fn migrate(legacy: LegacyDutchState) -> Self {
        let player_count = legacy.players.len();
        let limit = legacy
            .limit
            .as_ref()
            .map(crate::core::input::coerce_json_score)
            .and_then(|l| u32::try_from(l).ok())
            .filter(|l| *l > 0)
            .unwrap_or_else(|| legacy.mode.default_limit());

        let rounds = legacy
            .rounds
            .iter()
            .map(|r| {
                let mut scores = r.scores();
                scores.resize(player_count, 0);
                DutchRound {
                    raw: scores.clone(),
                    scores,
                    caller: None,
                    success: false,
                }
            })
            .collect();

        let mut session = Self {
            phase: if player_count == 0 {
                SessionPhase::Setup
            } else {
                SessionPhase::InProgress
            },
            players: legacy.players,
            rounds,
            mode: legacy.mode,
            limit,
            dealer: PlayerId::from_index(legacy.dealer_idx, player_count).unwrap_or_default(),
        };
        if session.phase == SessionPhase::InProgress && session.is_over() {
            session.phase = SessionPhase::Finished;
        }
        session
    }
}
