//! Dutch score sheet.
//!
//! Players enter the card points left in their hand each round; lowest
//! total wins. Before scores are known one player may call "Dutch":
//! - strictly lowest that round: the caller scores -10
//! - tied for lowest: the call is void
//! - otherwise: the caller takes a 10 point penalty
//!
//! The game ends on a score limit (any total reaches it) or a round limit.

mod game;
mod rule;

pub use game::{DutchRound, DutchSession, LegacyDutchState, DUTCH_KEY};
pub use rule::{resolve_round, DutchOutcome, Resolution};
