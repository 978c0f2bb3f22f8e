//! Player registration: name normalization and setup validation.
//!
//! Names are trimmed, blank entries are dropped, and the first letter is
//! upper-cased. Uniqueness is checked after normalization, so "alice" and
//! " Alice" collide.

use rustc_hash::FxHashSet;

use super::error::ScoreError;
use super::player::MAX_PLAYERS;

/// Normalize one entered name. Returns `None` for blank input.
///
/// ```
/// use scoresheet::core::roster::normalize_name;
///
/// assert_eq!(normalize_name("  émile "), Some("Émile".to_string()));
/// assert_eq!(normalize_name("   "), None);
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    let mut name: String = first.to_uppercase().collect();
    name.push_str(chars.as_str());
    Some(name)
}

/// Normalize a list of entered names and validate it for a game needing
/// at least `min_players` seats.
pub fn validate_roster<S: AsRef<str>>(
    raw: &[S],
    min_players: usize,
) -> Result<Vec<String>, ScoreError> {
    let names: Vec<String> = raw
        .iter()
        .filter_map(|n| normalize_name(n.as_ref()))
        .collect();

    if names.len() < min_players {
        return Err(ScoreError::NotEnoughPlayers {
            min: min_players,
            got: names.len(),
        });
    }
    if names.len() > MAX_PLAYERS {
        return Err(ScoreError::TooManyPlayers {
            max: MAX_PLAYERS,
            got: names.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(ScoreError::DuplicateName(name.clone()));
        }
    }

    Ok(names)
}
