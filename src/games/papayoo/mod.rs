//! Papayoo score sheet.
//!
//! Each deal distributes exactly 250 points; lowest total wins. Before the
//! deal a die picks the suit whose 7 (the Papayoo) is worth 40 points.
//! - the suit must be chosen before scores can be entered
//! - a round must total 250 unless the players override the check
//! - a single blank score can be auto-completed
//! - final scores unlock once there are at least as many rounds as players

mod game;
mod rule;
mod suit;

pub use game::{LegacyPapayooState, PapayooRound, PapayooSession, PAPAYOO_KEY};
pub use rule::{auto_complete, deal_table, round_sum, validate_round, DealInfo};
pub use suit::Suit;
