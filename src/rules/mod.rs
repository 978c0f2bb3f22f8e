//! Game-independent scoring rules.
//!
//! Each game's session implements `ScoreSheet` to expose:
//! - Registered players and the current dealer
//! - Final per-round scores
//! - Its lifecycle phase
//!
//! Totals, standings and the end-of-game result are derived from that view
//! and never interpret game-specific concepts directly.

pub mod engine;
pub mod ranking;

pub use engine::{GameResult, ScoreSheet};
pub use ranking::{Ranking, Standing};
