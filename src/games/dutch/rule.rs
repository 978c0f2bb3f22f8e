//! The Dutch call adjustment.
//!
//! A player may call "Dutch" before scores are known, betting they will
//! score lowest. Against `m`, the lowest raw score among the other players:
//! - strictly lower than `m`: the caller scores `DUTCH_BONUS_SCORE` (-10)
//! - equal to `m`: the call is void, the caller keeps the raw score
//! - higher than `m`: the caller scores raw + `DUTCH_PENALTY`
//!
//! Everyone else keeps their raw score. A caller alone at the table has
//! nobody to compare against and the call is void.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, ScoreRow, DUTCH_BONUS_SCORE, DUTCH_PENALTY};

/// How a Dutch call resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DutchOutcome {
    /// Strictly lowest.
    Bonus,
    /// Tied for lowest, or nobody to compare against.
    Void,
    /// Someone else scored lower.
    Penalty,
}

/// Final scores of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub scores: ScoreRow,
    /// `None` when nobody called (or the caller seat does not exist).
    pub outcome: Option<DutchOutcome>,
}

/// Apply the Dutch rule to one round of raw scores.
///
/// Total and deterministic: a caller index outside `raw` is ignored.
///
/// ```
/// use scoresheet::core::PlayerId;
/// use scoresheet::games::dutch::{resolve_round, DutchOutcome};
///
/// let resolution = resolve_round(&[3, 5, 8], Some(PlayerId::new(0)));
/// assert_eq!(resolution.scores.as_slice(), &[-10, 5, 8]);
/// assert_eq!(resolution.outcome, Some(DutchOutcome::Bonus));
/// ```
#[must_use]
pub fn resolve_round(raw: &[i32], caller: Option<PlayerId>) -> Resolution {
    let mut scores: ScoreRow = raw.iter().copied().collect();

    let Some(caller) = caller.filter(|c| c.index() < raw.len()) else {
        return Resolution {
            scores,
            outcome: None,
        };
    };

    let own = raw[caller.index()];
    let min_others = raw
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != caller.index())
        .map(|(_, score)| *score)
        .min();

    let outcome = match min_others {
        Some(m) if own < m => DutchOutcome::Bonus,
        Some(m) if own > m => DutchOutcome::Penalty,
        _ => DutchOutcome::Void,
    };

    scores[caller.index()] = match outcome {
        DutchOutcome::Bonus => DUTCH_BONUS_SCORE,
        DutchOutcome::Void => own,
        DutchOutcome::Penalty => own.saturating_add(DUTCH_PENALTY),
    };

    Resolution {
        scores,
        outcome: Some(outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(i: u8) -> Option<PlayerId> {
        Some(PlayerId::new(i))
    }

    #[test]
    fn test_no_caller_keeps_raw_scores() {
        let resolution = resolve_round(&[4, 0, 9], None);
        assert_eq!(resolution.scores.as_slice(), &[4, 0, 9]);
        assert_eq!(resolution.outcome, None);
    }

    #[test]
    fn test_tied_lowest_is_void() {
        let resolution = resolve_round(&[5, 5, 8], caller(0));
        assert_eq!(resolution.scores.as_slice(), &[5, 5, 8]);
        assert_eq!(resolution.outcome, Some(DutchOutcome::Void));
    }

    #[test]
    fn test_strictly_lowest_gets_bonus() {
        let resolution = resolve_round(&[3, 5, 8], caller(0));
        assert_eq!(resolution.scores.as_slice(), &[-10, 5, 8]);
        assert_eq!(resolution.outcome, Some(DutchOutcome::Bonus));
    }

    #[test]
    fn test_not_lowest_gets_penalty() {
        let resolution = resolve_round(&[9, 5, 8], caller(0));
        assert_eq!(resolution.scores.as_slice(), &[19, 5, 8]);
        assert_eq!(resolution.outcome, Some(DutchOutcome::Penalty));
    }

    #[test]
    fn test_caller_in_the_middle() {
        let resolution = resolve_round(&[2, 0, 7], caller(1));
        assert_eq!(resolution.scores.as_slice(), &[2, -10, 7]);
    }

    #[test]
    fn test_lone_caller_is_void() {
        let resolution = resolve_round(&[6], caller(0));
        assert_eq!(resolution.scores.as_slice(), &[6]);
        assert_eq!(resolution.outcome, Some(DutchOutcome::Void));
    }

    #[test]
    fn test_out_of_range_caller_ignored() {
        let resolution = resolve_round(&[1, 2], caller(5));
        assert_eq!(resolution.scores.as_slice(), &[1, 2]);
        assert_eq!(resolution.outcome, None);
    }

    #[test]
    fn test_empty_round() {
        let resolution = resolve_round(&[], caller(0));
        assert!(resolution.scores.is_empty());
        assert_eq!(resolution.outcome, None);
    }
}
