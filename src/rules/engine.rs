//! Score sheet trait implemented by each game's session.
//!
//! Sessions own their rounds; the sheet view exposes them uniformly so
//! totals, ranking, end-of-game results and rendering never need to know
//! which game produced the numbers.

use crate::core::{PlayerId, PlayerMap, SessionPhase};

use super::ranking::Ranking;

/// Result of a finished game. Lowest total wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the lowest total, in seat order.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Derive the result from final totals. `None` for an empty table.
    #[must_use]
    pub fn from_totals(totals: &PlayerMap<i32>) -> Option<Self> {
        let best = totals.min_value()?;
        let mut leaders: Vec<PlayerId> = totals
            .iter()
            .filter(|(_, total)| **total == best)
            .map(|(player, _)| player)
            .collect();

        Some(if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Winners(leaders)
        })
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }

    /// Winning seats in seat order.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Winners(ps) => ps.clone(),
        }
    }
}

/// Read-only view of a game's score sheet.
///
/// ## Implementation Notes
///
/// - `round_scores` returns final (post-rule) scores in seat order
/// - `round_label` is an optional per-round marker (the Papayoo suit)
/// - Rows shorter than the table count missing seats as 0
pub trait ScoreSheet {
    /// Registered names in seat order. Empty during setup.
    fn players(&self) -> &[String];

    /// Current lifecycle phase.
    fn phase(&self) -> SessionPhase;

    /// Seat that deals the next round.
    fn dealer(&self) -> PlayerId;

    /// Number of committed rounds.
    fn round_count(&self) -> usize;

    /// Final scores of a committed round.
    fn round_scores(&self, round: usize) -> Option<&[i32]>;

    /// Marker shown next to the round number.
    fn round_label(&self, _round: usize) -> Option<String> {
        None
    }

    // === Convenience Methods ===

    /// Running total per seat.
    fn totals(&self) -> PlayerMap<i32> {
        let mut totals = PlayerMap::with_value(self.players().len(), 0);
        for round in 0..self.round_count() {
            if let Some(row) = self.round_scores(round) {
                totals.accumulate(row);
            }
        }
        totals
    }

    /// Current standings, lowest total first.
    fn ranking(&self) -> Ranking {
        Ranking::new(self.players(), &self.totals())
    }

    /// Final result once the game is finished.
    fn is_terminal(&self) -> Option<GameResult> {
        if self.phase() == SessionPhase::Finished {
            GameResult::from_totals(&self.totals())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSheet {
        players: Vec<String>,
        rounds: Vec<Vec<i32>>,
        phase: SessionPhase,
    }

    impl ScoreSheet for FixedSheet {
        fn players(&self) -> &[String] {
            &self.players
        }

        fn phase(&self) -> SessionPhase {
            self.phase
        }

        fn dealer(&self) -> PlayerId {
            PlayerId::new(0)
        }

        fn round_count(&self) -> usize {
            self.rounds.len()
        }

        fn round_scores(&self, round: usize) -> Option<&[i32]> {
            self.rounds.get(round).map(Vec::as_slice)
        }
    }

    fn sheet(phase: SessionPhase) -> FixedSheet {
        FixedSheet {
            players: vec!["Ann".into(), "Bob".into(), "Cy".into()],
            rounds: vec![vec![5, 3, 8], vec![1, 3]],
            phase,
        }
    }

    #[test]
    fn test_totals_pad_short_rows() {
        let totals = sheet(SessionPhase::InProgress).totals();
        assert_eq!(totals.as_slice(), &[6, 6, 8]);
    }

    #[test]
    fn test_terminal_only_when_finished() {
        assert_eq!(sheet(SessionPhase::InProgress).is_terminal(), None);

        let result = sheet(SessionPhase::Finished).is_terminal().unwrap();
        assert_eq!(
            result,
            GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(1)])
        );
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let shared = GameResult::Winners(vec![PlayerId::new(0), PlayerId::new(2)]);
        assert!(shared.is_winner(PlayerId::new(0)));
        assert!(!shared.is_winner(PlayerId::new(1)));
        assert_eq!(shared.winners().len(), 2);
    }

    #[test]
    fn test_from_totals_empty_table() {
        let totals: PlayerMap<i32> = PlayerMap::with_value(0, 0);
        assert_eq!(GameResult::from_totals(&totals), None);
    }
}
