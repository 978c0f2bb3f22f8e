//! Final standings.
//!
//! Lower total wins. Ties keep registration order, so the ranking is a
//! total order even when several players share a score.

use serde::Serialize;

use crate::core::{PlayerId, PlayerMap};

/// One line of the standings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Standing {
    /// 0-based position; position 0 is highlighted as the winner.
    pub position: usize,
    pub player: PlayerId,
    pub name: String,
    pub total: i32,
}

/// Standings sorted by ascending total.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Ranking {
    standings: Vec<Standing>,
}

impl Ranking {
    /// Rank seats by total. Seats without a name are labelled by seat.
    #[must_use]
    pub fn new(names: &[String], totals: &PlayerMap<i32>) -> Self {
        let mut order: Vec<(PlayerId, i32)> = totals.iter().map(|(p, t)| (p, *t)).collect();
        // sort_by_key is stable: equal totals keep seat order
        order.sort_by_key(|(_, total)| *total);

        let standings = order
            .into_iter()
            .enumerate()
            .map(|(position, (player, total))| Standing {
                position,
                player,
                name: names
                    .get(player.index())
                    .cloned()
                    .unwrap_or_else(|| player.to_string()),
                total,
            })
            .collect();

        Self { standings }
    }

    #[must_use]
    pub fn standings(&self) -> &[Standing] {
        &self.standings
    }

    /// The rank-0 line.
    #[must_use]
    pub fn leader(&self) -> Option<&Standing> {
        self.standings.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Standing> {
        self.standings.iter()
    }
}
