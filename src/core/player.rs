//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat index supporting up to 255 players. Seats follow
//! registration order: the first registered name is `PlayerId(0)`.
//!
//! ## PlayerMap
//!
//! Per-seat values (totals, raw scores) backed by a `Vec` for O(1) access,
//! indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Most tables seat eight players or fewer; larger ones spill to the heap.
pub type ScoreRow = SmallVec<[i32; 8]>;

/// Maximum number of seats at one table.
pub const MAX_PLAYERS: usize = 255;

/// Seat identifier (0-based registration order).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Build a seat ID from a 0-based index, if it fits a table of
    /// `player_count` seats.
    #[must_use]
    pub fn from_index(index: usize, player_count: usize) -> Option<Self> {
        (index < player_count && index < MAX_PLAYERS).then(|| Self(index as u8))
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat to the left, wrapping around the table.
    ///
    /// ```
    /// use scoresheet::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(3), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        if player_count == 0 {
            return self;
        }
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all seats of a table with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count.min(MAX_PLAYERS) as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use scoresheet::core::{PlayerId, PlayerMap};
///
/// let mut totals: PlayerMap<i32> = PlayerMap::with_value(3, 0);
/// totals[PlayerId::new(1)] += 12;
/// assert_eq!(totals[PlayerId::new(1)], 12);
/// assert_eq!(totals.player_count(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count <= MAX_PLAYERS, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Wrap an existing per-seat vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(data.len() <= MAX_PLAYERS, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a seat's value, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Values in seat order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl PlayerMap<i32> {
    /// Add a round's row to these totals. Missing entries count as 0;
    /// totals saturate at the `i32` bounds.
    pub fn accumulate(&mut self, row: &[i32]) {
        for (total, score) in self.data.iter_mut().zip(row.iter()) {
            *total = total.saturating_add(*score);
        }
    }

    /// Smallest value, if any seat exists.
    #[must_use]
    pub fn min_value(&self) -> Option<i32> {
        self.data.iter().copied().min()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
