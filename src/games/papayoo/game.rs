//! Papayoo session: color selection, round entry, edits and the final
//! ranking unlock.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::rule::validate_round;
use super::suit::Suit;
use crate::core::roster::validate_roster;
use crate::core::{
    PlayerId, ScoreError, ScoreRow, SessionPhase, TableConfig, PAPAYOO_MIN_PLAYERS,
};
use crate::rules::ScoreSheet;
use crate::storage::{LegacyRound, Versioned};

/// Storage key of the Papayoo session.
pub const PAPAYOO_KEY: &str = "papayoo_state";

/// One committed Papayoo round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PapayooRound {
    pub scores: ScoreRow,
    /// Papayoo suit of the deal. Only legacy rounds can lack one.
    #[serde(default)]
    pub color: Option<Suit>,
}

/// Complete Papayoo session state, persisted wholesale after every change.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PapayooSession {
    phase: SessionPhase,
    players: Vec<String>,
    rounds: Vector<PapayooRound>,
    dealer: PlayerId,
    /// Suit rolled for the round being entered.
    #[serde(default)]
    active_color: Option<Suit>,
}

impl PapayooSession {
    /// Create an empty session in setup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the table and leave setup. Needs at least three unique
    /// non-blank names.
    pub fn start(&mut self, table: &TableConfig) -> Result<(), ScoreError> {
        if self.phase != SessionPhase::Setup {
            return Err(ScoreError::wrong_phase("start a game", self.phase));
        }
        let players = validate_roster(&table.names, PAPAYOO_MIN_PLAYERS)?;
        let dealer = PlayerId::from_index(table.dealer, players.len()).ok_or(
            ScoreError::InvalidDealer {
                index: table.dealer,
                player_count: players.len(),
            },
        )?;

        info!("papayoo game started: {} players", players.len());
        *self = Self {
            phase: SessionPhase::InProgress,
            players,
            rounds: Vector::new(),
            dealer,
            active_color: None,
        };
        Ok(())
    }

    /// Choose the Papayoo suit for the next round.
    pub fn select_color(&mut self, suit: Suit) -> Result<(), ScoreError> {
        if !self.phase.accepts_rounds() {
            return Err(ScoreError::wrong_phase("select a color", self.phase));
        }
        debug!("papayoo color {suit} selected");
        self.active_color = Some(suit);
        Ok(())
    }

    /// Suit selected for the round being entered.
    #[must_use]
    pub fn active_color(&self) -> Option<Suit> {
        self.active_color
    }

    /// Commit a new round.
    ///
    /// A color must have been selected. Fields beyond the given ones are
    /// blank; blanks count as 0. The total must be 250 unless
    /// `allow_mismatch` is set. On success the dealer rotates and the
    /// color is cleared for the next deal.
    pub fn record_round(
        &mut self,
        fields: &[Option<i32>],
        allow_mismatch: bool,
    ) -> Result<PapayooRound, ScoreError> {
        if !self.phase.accepts_rounds() {
            return Err(ScoreError::wrong_phase("record a round", self.phase));
        }
        let color = self.active_color.ok_or(ScoreError::MissingColor)?;
        let scores = self.checked_row(fields, allow_mismatch)?;

        let round = PapayooRound {
            scores,
            color: Some(color),
        };
        self.rounds.push_back(round.clone());
        self.dealer = self.dealer.next(self.players.len());
        self.active_color = None;
        info!(
            "papayoo round {} recorded ({color}): {:?}",
            self.rounds.len(),
            round.scores.as_slice()
        );
        Ok(round)
    }

    /// Revise the scores of committed round `index` (0-based).
    ///
    /// The round keeps its color and the dealer does not move.
    pub fn edit_round(
        &mut self,
        index: usize,
        fields: &[Option<i32>],
        allow_mismatch: bool,
    ) -> Result<PapayooRound, ScoreError> {
        if !self.phase.accepts_rounds() {
            return Err(ScoreError::wrong_phase("edit a round", self.phase));
        }
        if index >= self.rounds.len() {
            return Err(ScoreError::UnknownRound(index + 1));
        }
        let scores = self.checked_row(fields, allow_mismatch)?;

        let round = &mut self.rounds[index];
        round.scores = scores;
        info!("papayoo round {} edited: {:?}", index + 1, round.scores.as_slice());
        Ok(round.clone())
    }

    fn checked_row(
        &self,
        fields: &[Option<i32>],
        allow_mismatch: bool,
    ) -> Result<ScoreRow, ScoreError> {
        let player_count = self.players.len();
        if fields.len() > player_count {
            return Err(ScoreError::ScoreCount {
                expected: player_count,
                got: fields.len(),
            });
        }
        let mut padded = fields.to_vec();
        padded.resize(player_count, None);
        validate_round(&padded, allow_mismatch)
    }

    /// Final scores unlock once every player has dealt at least once.
    #[must_use]
    pub fn can_finish(&self) -> bool {
        self.phase.accepts_rounds() && self.rounds.len() >= self.players.len()
    }

    /// Close the game and show the final ranking.
    pub fn finish(&mut self) -> Result<(), ScoreError> {
        if !self.phase.accepts_rounds() {
            return Err(ScoreError::wrong_phase("finish the game", self.phase));
        }
        if !self.can_finish() {
            return Err(ScoreError::FinishTooEarly {
                required: self.players.len(),
                played: self.rounds.len(),
            });
        }
        info!("papayoo game finished after {} rounds", self.rounds.len());
        self.phase = SessionPhase::Finished;
        Ok(())
    }

    /// Drop everything and return to setup.
    pub fn reset(&mut self) {
        info!("papayoo session reset");
        *self = Self::default();
    }

    #[must_use]
    pub fn rounds(&self) -> &Vector<PapayooRound> {
        &self.rounds
    }
}

impl ScoreSheet for PapayooSession {
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

    fn round_label(&self, round: usize) -> Option<String> {
        self.rounds
            .get(round)
            .and_then(|r| r.color)
            .map(|suit| suit.to_string())
    }
}

/// Blob written by the legacy score page.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyPapayooState {
    #[serde(default)]
    players: Vec<String>,
    #[serde(default)]
    rounds: Vec<LegacyRound>,
    #[serde(default)]
    dealer_idx: usize,
    #[serde(default)]
    active_papayoo_color: Option<String>,
}

impl Versioned for PapayooSession {
    const KEY: &'static str = PAPAYOO_KEY;
    type Legacy = LegacyPapayooState;

    fn migrate(legacy: LegacyPapayooState) -> Self {
        let player_count = legacy.players.len();
        let rounds = legacy
            .rounds
            .iter()
            .map(|r| {
                let mut scores = r.scores();
                scores.resize(player_count, 0);
                PapayooRound {
                    scores,
                    color: r.color().and_then(|c| c.parse().ok()),
                }
            })
            .collect();

        Self {
            phase: if player_count == 0 {
                SessionPhase::Setup
            } else {
                SessionPhase::InProgress
            },
            players: legacy.players,
            rounds,
            dealer: PlayerId::from_index(legacy.dealer_idx, player_count).unwrap_or_default(),
            active_color: legacy
                .active_papayoo_color
                .as_deref()
                .and_then(|c| c.parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::GameResult;
    use crate::storage::decode;

    fn started() -> PapayooSession {
        let mut session = PapayooSession::new();
        session
            .start(&TableConfig::new(["ann", "bob", "cy"]))
            .unwrap();
        session
    }

    fn row(scores: &[i32]) -> Vec<Option<i32>> {
        scores.iter().copied().map(Some).collect()
    }

    #[test]
    fn test_start_requires_three_players() {
        let mut session = PapayooSession::new();
        assert_eq!(
            session.start(&TableConfig::new(["ann", "bob"])),
            Err(ScoreError::NotEnoughPlayers { min: 3, got: 2 })
        );
        assert_eq!(
            session.start(&TableConfig::new(["ann", "bob", "ANN", "ann"])),
            Err(ScoreError::DuplicateName("Ann".into()))
        );
    }

    #[test]
    fn test_color_required_before_round() {
        let mut session = started();
        assert_eq!(
            session.record_round(&row(&[100, 100, 50]), false),
            Err(ScoreError::MissingColor)
        );
    }

    #[test]
    fn test_record_round_stores_color_and_resets_it() {
        let mut session = started();
        session.select_color(Suit::Hearts).unwrap();

        let round = session.record_round(&row(&[100, 100, 50]), false).unwrap();
        assert_eq!(round.color, Some(Suit::Hearts));
        assert_eq!(session.active_color(), None);
        assert_eq!(session.dealer(), PlayerId::new(1));
        assert_eq!(session.round_label(0), Some("♥".to_string()));
    }

    #[test]
    fn test_sum_mismatch_keeps_color_and_state() {
        let mut session = started();
        session.select_color(Suit::Clubs).unwrap();

        assert_eq!(
            session.record_round(&row(&[100, 100, 40]), false),
            Err(ScoreError::SumMismatch {
                sum: 240,
                expected: 250
            })
        );
        assert_eq!(session.round_count(), 0);
        assert_eq!(session.active_color(), Some(Suit::Clubs));
        assert_eq!(session.dealer(), PlayerId::new(0));

        session.record_round(&row(&[100, 100, 40]), true).unwrap();
        assert_eq!(session.round_count(), 1);
    }

    #[test]
    fn test_blank_fields_count_as_zero() {
        let mut session = started();
        session.select_color(Suit::Spades).unwrap();
        let round = session.record_round(&[Some(250)], false).unwrap();
        assert_eq!(round.scores.as_slice(), &[250, 0, 0]);
    }

    #[test]
    fn test_edit_round_keeps_color_and_dealer() {
        let mut session = started();
        session.select_color(Suit::Diamonds).unwrap();
        session.record_round(&row(&[200, 50, 0]), false).unwrap();
        session.select_color(Suit::Hearts).unwrap();

        let edited = session.edit_round(0, &row(&[0, 50, 200]), false).unwrap();
        assert_eq!(edited.color, Some(Suit::Diamonds));
        assert_eq!(session.totals().as_slice(), &[0, 50, 200]);
        assert_eq!(session.dealer(), PlayerId::new(1));
        assert_eq!(session.active_color(), Some(Suit::Hearts));

        assert_eq!(
            session.edit_round(0, &row(&[1, 1, 1]), false),
            Err(ScoreError::SumMismatch {
                sum: 3,
                expected: 250
            })
        );
        assert_eq!(
            session.edit_round(3, &row(&[250]), false),
            Err(ScoreError::UnknownRound(4))
        );
    }

    #[test]
    fn test_finish_unlocks_after_one_round_per_player() {
        let mut session = started();
        for (suit, scores) in [
            (Suit::Hearts, [40, 110, 100]),
            (Suit::Spades, [10, 200, 40]),
        ] {
            session.select_color(suit).unwrap();
            session.record_round(&row(&scores), false).unwrap();
        }
        assert!(!session.can_finish());
        assert_eq!(
            session.finish(),
            Err(ScoreError::FinishTooEarly {
                required: 3,
                played: 2
            })
        );

        session.select_color(Suit::Clubs).unwrap();
        session.record_round(&row(&[0, 125, 125]), false).unwrap();
        assert!(session.can_finish());
        session.finish().unwrap();

        assert_eq!(session.phase(), SessionPhase::Finished);
        assert_eq!(session.is_terminal(), Some(GameResult::Winner(PlayerId::new(0))));
        assert!(matches!(
            session.select_color(Suit::Hearts),
            Err(ScoreError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_reset_returns_to_setup() {
        let mut session = started();
        session.select_color(Suit::Hearts).unwrap();
        session.reset();
        assert_eq!(session, PapayooSession::default());
    }

    #[test]
    fn test_legacy_blob_migrates() {
        let legacy = r#"{
            "players": ["Ann", "Bob", "Cy"],
            "rounds": [
                {"scores": [100, 100, 50], "color": "♥"},
                [50, 100, 100],
                {"scores": [0, 0, 250], "color": null}
            ],
            "dealerIdx": 1,
            "activePapayooColor": "♣"
        }"#;
        let session = decode::<PapayooSession>(legacy).unwrap().into_inner();

        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.round_count(), 3);
        assert_eq!(session.rounds()[0].color, Some(Suit::Hearts));
        assert_eq!(session.rounds()[1].color, None);
        assert_eq!(session.rounds()[2].color, None);
        assert_eq!(session.active_color(), Some(Suit::Clubs));
        assert_eq!(session.dealer(), PlayerId::new(1));
        assert_eq!(session.totals().as_slice(), &[150, 200, 400]);
    }
}
