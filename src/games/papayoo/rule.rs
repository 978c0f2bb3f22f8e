//! Papayoo round validation.
//!
//! Every deal hands out exactly `PAPAYOO_POINTS` (250): the twenty payoos
//! are worth their face value and the Papayoo is worth 40. A round whose
//! scores do not add up is a data-entry mistake, so it is refused unless
//! the players explicitly accept it.
//!
//! Score fields may be blank. With exactly one blank, auto-complete fills
//! it with whatever is missing from 250; at commit, blanks count as 0.

use crate::core::{ScoreError, ScoreRow, PAPAYOO_POINTS};

/// Sum of the filled fields. Exact for any number of `i32` scores.
#[must_use]
pub fn round_sum(fields: &[Option<i32>]) -> i64 {
    fields.iter().flatten().map(|score| i64::from(*score)).sum()
}

/// Fill the single blank field so the round sums to 250.
///
/// Returns the index that was filled and its value.
///
/// ```
/// use scoresheet::games::papayoo::auto_complete;
///
/// let mut fields = [Some(100), None, Some(60)];
/// assert_eq!(auto_complete(&mut fields), Ok((1, 90)));
/// assert_eq!(fields, [Some(100), Some(90), Some(60)]);
/// ```
pub fn auto_complete(fields: &mut [Option<i32>]) -> Result<(usize, i32), ScoreError> {
    let blanks: Vec<usize> = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.is_none())
        .map(|(i, _)| i)
        .collect();
    if blanks.len() != 1 {
        return Err(ScoreError::AutoCompleteBlanks(blanks.len()));
    }

    let needed = i64::from(PAPAYOO_POINTS) - round_sum(fields);
    let remaining =
        i32::try_from(needed).map_err(|_| ScoreError::AutoCompleteRange { needed })?;
    fields[blanks[0]] = Some(remaining);
    Ok((blanks[0], remaining))
}

/// Turn fields into a committed score row, enforcing the 250 total unless
/// `allow_mismatch` is set.
pub fn validate_round(fields: &[Option<i32>], allow_mismatch: bool) -> Result<ScoreRow, ScoreError> {
    let sum = round_sum(fields);
    if sum != i64::from(PAPAYOO_POINTS) && !allow_mismatch {
        return Err(ScoreError::SumMismatch {
            sum,
            expected: PAPAYOO_POINTS,
        });
    }
    Ok(fields.iter().map(|f| f.unwrap_or(0)).collect())
}

/// Cards dealt to each player and cards passed left, by table size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DealInfo {
    pub dealt: u8,
    pub passed: u8,
}

/// Deal sizes for the 60-card deck; only 3 to 6 players are supported by
/// the rules card.
#[must_use]
pub fn deal_table(player_count: usize) -> Option<DealInfo> {
    let (dealt, passed) = match player_count {
        3 => (20, 5),
        4 => (15, 5),
        5 => (12, 4),
        6 => (10, 3),
        _ => return None,
    };
    Some(DealInfo { dealt, passed })
}
