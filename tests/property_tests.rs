//! Property tests for the scoring rules.
//!
//! These check the rules over arbitrary score rows rather than the handful
//! of tables in the unit tests.

use proptest::prelude::*;

use scoresheet::core::{
    PlayerId, PlayerMap, ScoreError, DUTCH_BONUS_SCORE, DUTCH_PENALTY, PAPAYOO_POINTS,
};
use scoresheet::games::dutch::{resolve_round, DutchOutcome};
use scoresheet::games::papayoo::{auto_complete, round_sum};
use scoresheet::rules::Ranking;

fn score_row() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..200, 1..8)
}

proptest! {
    /// Only the caller's score can change, and only to one of three values.
    #[test]
    fn prop_dutch_only_touches_caller(raw in score_row(), seat in 0usize..10) {
        let resolution = resolve_round(&raw, Some(PlayerId::new(seat as u8)));

        for (i, (before, after)) in raw.iter().zip(resolution.scores.iter()).enumerate() {
            if i != seat {
                prop_assert_eq!(before, after);
            }
        }

        match resolution.outcome {
            None => prop_assert!(seat >= raw.len()),
            Some(DutchOutcome::Bonus) => {
                prop_assert_eq!(resolution.scores[seat], DUTCH_BONUS_SCORE)
            }
            Some(DutchOutcome::Void) => prop_assert_eq!(resolution.scores[seat], raw[seat]),
            Some(DutchOutcome::Penalty) => {
                prop_assert_eq!(resolution.scores[seat], raw[seat] + DUTCH_PENALTY)
            }
        }
    }

    /// Without a caller the round is taken as entered.
    #[test]
    fn prop_no_caller_is_identity(raw in score_row()) {
        let resolution = resolve_round(&raw, None);
        prop_assert_eq!(resolution.scores.as_slice(), raw.as_slice());
        prop_assert_eq!(resolution.outcome, None);
    }

    /// Filling the single blank balances the round to 250 whenever the
    /// missing value is a representable score, and is refused otherwise.
    #[test]
    fn prop_auto_complete_balances(
        raw in prop::collection::vec(any::<i32>(), 1..8),
        blank in 0usize..8,
    ) {
        let blank = blank % raw.len();
        let mut fields: Vec<Option<i32>> = raw.iter().copied().map(Some).collect();
        fields[blank] = None;
        let before = fields.clone();

        match auto_complete(&mut fields) {
            Ok((filled, _)) => {
                prop_assert_eq!(filled, blank);
                prop_assert_eq!(round_sum(&fields), i64::from(PAPAYOO_POINTS));
            }
            Err(ScoreError::AutoCompleteRange { needed }) => {
                prop_assert!(i32::try_from(needed).is_err());
                prop_assert_eq!(needed, i64::from(PAPAYOO_POINTS) - round_sum(&before));
                prop_assert_eq!(fields, before);
            }
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    /// Small tables never hit the range limit.
    #[test]
    fn prop_auto_complete_small_scores(raw in score_row(), blank in 0usize..8) {
        let blank = blank % raw.len();
        let mut fields: Vec<Option<i32>> = raw.iter().copied().map(Some).collect();
        fields[blank] = None;

        prop_assert!(auto_complete(&mut fields).is_ok());
        prop_assert_eq!(round_sum(&fields), i64::from(PAPAYOO_POINTS));
    }

    /// Totals never overflow, and are exact while every running total
    /// stays within `i32`.
    #[test]
    fn prop_totals_never_overflow(rows in prop::collection::vec(
        prop::collection::vec(any::<i32>(), 3),
        1..6,
    )) {
        let mut totals: PlayerMap<i32> = PlayerMap::with_value(3, 0);
        for row in &rows {
            totals.accumulate(row);
        }
        for (seat, total) in totals.as_slice().iter().enumerate() {
            let running: Vec<i64> = rows
                .iter()
                .scan(0i64, |acc, row| {
                    *acc += i64::from(row[seat]);
                    Some(*acc)
                })
                .collect();
            if running.iter().all(|acc| i32::try_from(*acc).is_ok()) {
                prop_assert_eq!(Some(i64::from(*total)), running.last().copied());
            }
        }
    }

    /// Rankings are ascending and keep seat order among equal totals.
    #[test]
    fn prop_ranking_is_stable_ascending(totals in prop::collection::vec(-20i32..20, 1..8)) {
        let names: Vec<String> = (0..totals.len()).map(|i| format!("P{i}")).collect();
        let ranking = Ranking::new(&names, &PlayerMap::from_vec(totals.clone()));
        let standings = ranking.standings();

        prop_assert_eq!(standings.len(), totals.len());
        for pair in standings.windows(2) {
            prop_assert!(pair[0].total <= pair[1].total);
            if pair[0].total == pair[1].total {
                prop_assert!(pair[0].player.index() < pair[1].player.index());
            }
        }
    }
}
